use crate::error::HeapError;
use std::{fmt, str::FromStr};

/// Which extreme sits at the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Every parent is `<=` its children.
    Min,
    /// Every parent is `>=` its children.
    Max,
}

impl Order {
    /// Returns the strict "child is out of order relative to parent" test for this order.
    ///
    /// Equal values never violate, so ties stay where they are.
    #[inline]
    pub fn violates<T: PartialOrd>(self) -> fn(&T, &T) -> bool {
        match self {
            Order::Min => less::<T>,
            Order::Max => greater::<T>,
        }
    }
}

fn less<T: PartialOrd>(child: &T, parent: &T) -> bool {
    child < parent
}

fn greater<T: PartialOrd>(child: &T, parent: &T) -> bool {
    child > parent
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Order::Min => f.write_str("min"),
            Order::Max => f.write_str("max"),
        }
    }
}

impl FromStr for Order {
    type Err = HeapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" => Ok(Order::Min),
            "max" => Ok(Order::Max),
            _ => Err(HeapError::UnknownOrder(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violates_is_strict() {
        let min = Order::Min.violates::<i32>();
        assert!(min(&1, &2));
        assert!(!min(&2, &2));
        assert!(!min(&3, &2));

        let max = Order::Max.violates::<i32>();
        assert!(max(&3, &2));
        assert!(!max(&2, &2));
        assert!(!max(&1, &2));
    }

    #[test]
    fn parse() {
        assert_eq!("min".parse::<Order>(), Ok(Order::Min));
        assert_eq!(" MAX ".parse::<Order>(), Ok(Order::Max));
        assert_eq!(
            "median".parse::<Order>(),
            Err(HeapError::UnknownOrder("median".to_owned()))
        );
    }

    #[test]
    fn display_round_trips() {
        for order in [Order::Min, Order::Max].iter() {
            assert_eq!(order.to_string().parse::<Order>(), Ok(*order));
        }
    }
}
