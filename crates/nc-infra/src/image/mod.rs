mod probe;

pub use probe::ImageHeaderProbe;
