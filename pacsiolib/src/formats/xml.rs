//! XML-форма `<GrpHdr>` через serde-поддержку quick-xml.
//!
//! При чтении quick-xml обрезает пробелы по краям текстовых узлов
//! (как `trim_text(true)` у читателя выписок), поэтому `"  A  "` вернётся как `"A"`.
//! JSON сохраняет текст без изменений.

use crate::{
    error::{PacsError, Result},
    model::GroupHeader3,
    traits::{ReadFormat, WriteFormat},
};
use quick_xml::{
    de::from_reader,
    events::{BytesDecl, Event},
    se::Serializer,
    Writer,
};
use serde::Serialize;
use std::io::{BufRead, Write};

pub struct Xml;

impl WriteFormat for Xml {
    fn write<W: Write>(mut w: W, header: &GroupHeader3) -> Result<()> {
        let mut body = String::new();
        let mut ser = Serializer::new(&mut body);
        ser.indent(' ', 2);
        header.serialize(ser).map_err(xml)?;

        // <?xml ...?> пишем вручную, serde-сериализатор его не выводит
        let mut wr = Writer::new(&mut w);
        wr.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml)?;
        let out = wr.into_inner();
        out.write_all(b"\n")?;
        out.write_all(body.as_bytes())?;
        out.write_all(b"\n")?;

        tracing::debug!(msg_id = ?header.message_id(), bytes = body.len(), "wrote GrpHdr xml");
        Ok(())
    }
}

impl ReadFormat for Xml {
    fn read<R: BufRead>(r: R) -> Result<GroupHeader3> {
        let header: GroupHeader3 = from_reader(r).map_err(xml)?;
        tracing::debug!(msg_id = ?header.message_id(), "read GrpHdr xml");
        Ok(header)
    }
}

fn xml<E: std::fmt::Display>(e: E) -> PacsError {
    PacsError::Xml(e.to_string())
}
