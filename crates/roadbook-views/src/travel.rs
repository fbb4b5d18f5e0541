//! Travel derivations: the summary bar over all legs

use roadbook_model::{TransportType, TravelLeg};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Summary aggregate over a set of travel legs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelAggregate {
    /// Number of legs
    pub total_legs: usize,
    /// Sum of leg costs; a missing cost counts as zero
    ///
    /// Decimal arithmetic - monetary sums must not accumulate float error
    /// or silently truncate.
    pub total_cost: Decimal,
    /// Legs flown
    pub flight_count: usize,
    /// Legs by bus
    pub bus_count: usize,
}

/// Compute the travel summary over all legs
#[must_use]
pub fn travel_aggregate(legs: &[TravelLeg]) -> TravelAggregate {
    let mut agg = TravelAggregate {
        total_legs: legs.len(),
        ..TravelAggregate::default()
    };
    for leg in legs {
        agg.total_cost += leg.cost.unwrap_or(Decimal::ZERO);
        match leg.transport {
            TransportType::Flight => agg.flight_count += 1,
            TransportType::Bus => agg.bus_count += 1,
            _ => {}
        }
    }
    agg
}
