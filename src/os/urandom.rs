//! Operating system entropy (generic Unix)
//!
//! Platforms without a dedicated binding read from `/dev/urandom`.

use std::fs::File;
use std::io::{self, Read};

pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    let mut urandom = File::open("/dev/urandom")?;
    urandom.read_exact(buf)
}
