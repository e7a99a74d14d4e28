//! Read the timing parameters and key codes from lircd.conf remote descriptions,
//! and find the files which describe them.

pub mod lircd_conf;
pub mod walk;
