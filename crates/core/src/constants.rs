/// Category used when a submission or form request carries none.
pub const DEFAULT_CATEGORY: &str = furnflip_comps::DEFAULT_CATEGORY;

/// Material used when a submission carries none.
pub const DEFAULT_MATERIAL: &str = "wood";

/// Product name shown in form titles.
pub const APP_NAME: &str = "FurnitureFlip";

/// Upper bound for a platform fee percentage.
pub const MAX_FEES_PCT: f64 = 100.0;
