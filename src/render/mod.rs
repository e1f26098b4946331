pub(crate) mod connector;
pub(crate) mod curve;
pub(crate) mod raster;
pub(crate) mod scene;
pub(crate) mod sequence;
pub(crate) mod surface;
