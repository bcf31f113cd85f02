pub mod config;
pub mod consts;
pub mod error;
pub mod hotspot;
pub mod interaction;
pub mod layout;
pub mod readout;
pub mod relayout;
pub mod render;
pub mod sanitize;
pub mod session;
pub mod source;
pub mod zoom;
