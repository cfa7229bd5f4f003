//! Spacing constants shared by the contact views.

/// Extra small spacing value (4px)
pub const SPACING_XS: f32 = 4.0;

/// Small spacing value (8px)
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing value (12px)
pub const SPACING_MD: f32 = 12.0;

/// Width of the form's text inputs.
pub const FIELD_WIDTH: f32 = 220.0;

/// Height of the result list before it starts scrolling.
pub const LIST_HEIGHT: f32 = 160.0;
