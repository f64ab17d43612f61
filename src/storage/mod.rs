pub mod mapped_region;

pub use mapped_region::MappedRegion;
