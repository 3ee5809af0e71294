//! JSON-объект с теми же ключами, что и теги XML.

use crate::{
    error::Result,
    model::GroupHeader3,
    traits::{ReadFormat, WriteFormat},
};
use std::io::{BufRead, Write};

pub struct Json;

impl WriteFormat for Json {
    fn write<W: Write>(mut w: W, header: &GroupHeader3) -> Result<()> {
        serde_json::to_writer_pretty(&mut w, header)?;
        w.write_all(b"\n")?;
        tracing::debug!(msg_id = ?header.message_id(), "wrote GrpHdr json");
        Ok(())
    }
}

impl ReadFormat for Json {
    fn read<R: BufRead>(r: R) -> Result<GroupHeader3> {
        let header: GroupHeader3 = serde_json::from_reader(r)?;
        tracing::debug!(msg_id = ?header.message_id(), "read GrpHdr json");
        Ok(header)
    }
}
