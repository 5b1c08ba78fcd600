//! Club stadiums

use crate::types::Money;
use crate::utils::decimal;
use serde::{Deserialize, Serialize};

/// Capacity of a newly built stadium
pub const INITIAL_CAPACITY: u64 = 10_000;

/// A stadium where a club plays its home matches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stadium {
    pub name: String,
    pub level: u32,
    pub capacity: u64,
    pub level_up_cost: Money,
}

impl Stadium {
    pub fn new(name: impl Into<String>, level_up_cost: Money) -> Self {
        Self {
            name: name.into(),
            level: 1,
            capacity: INITIAL_CAPACITY,
            level_up_cost,
        }
    }

    /// Expand the stadium: capacity doubles and the next expansion costs
    /// 10^(new level) times more
    pub fn level_up(&mut self) {
        self.level += 1;
        self.capacity *= 2;
        self.level_up_cost = &self.level_up_cost * &decimal(1, -i64::from(self.level));
    }
}
