//! Трэйты чтения/записи заголовка на основе std::io::{BufRead, Write}.

use crate::{error::Result, model::GroupHeader3};
use std::io::{BufRead, Write};

pub trait ReadFormat {
    fn read<R: BufRead>(r: R) -> Result<GroupHeader3>;
}

pub trait WriteFormat {
    fn write<W: Write>(w: W, header: &GroupHeader3) -> Result<()>;
}

pub trait Format: ReadFormat + WriteFormat {}
impl<T: ReadFormat + WriteFormat> Format for T {}
