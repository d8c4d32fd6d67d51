#[cfg(feature = "serde")]
pub mod de;

#[cfg(feature = "serde")]
pub mod ser;
