//! Data module - measurement parsing, validation and chart series

mod loader;
mod processor;
mod record;

pub use loader::{
    DataLoader, GrowthCandidate, InputError, RawMeasurements, DRY_WEIGHT_FLAG, HEIGHT_FLAG,
    LEAF_COUNT_FLAG, PLANT_FLAG,
};
pub use processor::{Bin, DataProcessor, AXIS_MARGIN, HISTOGRAM_BINS};
pub use record::{GrowthRecord, ValidationError};
