pub mod assessment;
pub mod band;
pub mod layer;
pub mod responses;
pub mod status;
