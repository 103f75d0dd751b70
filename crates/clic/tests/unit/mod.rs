//! # Unit Components
//!
//! Tests grouped by the part of the model they exercise: storage and decode
//! in `regmap`, the bus attachment in `soc`, plus configuration, statistics,
//! the reference scenarios and the map-wide properties.



/// Register files, decoding and the assembled map.
pub mod regmap;



/// Access statistics.
pub mod stats;
