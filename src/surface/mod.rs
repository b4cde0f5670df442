//! Pure presentation-support logic: everything the view layer needs that
//! is still just a function of decoded data (icon and color lookup tables,
//! read-aloud text preparation). Widget rendering itself lives outside
//! this crate.

pub mod icons;
pub mod risk;
pub mod speech;

pub use icons::TippingIcon;
pub use risk::RiskColor;
pub use speech::speakable_text;
