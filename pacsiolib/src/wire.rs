//! Соответствие полей `GroupHeader3` тегам XML.
//!
//! Те же имена стоят в serde-атрибутах [`crate::model::GroupHeader3`];
//! таблица нужна тем, кто сопоставляет поля сам.

/// Имя корневого элемента заголовка.
pub const GROUP_HEADER3_ELEMENT: &str = "GrpHdr";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireTag {
    /// Имя поля в `GroupHeader3`.
    pub field: &'static str,
    /// Тег XML.
    pub tag: &'static str,
    /// По схеме элемент необязателен.
    pub omit_when_empty: bool,
}

const fn tag(field: &'static str, tag: &'static str, omit_when_empty: bool) -> WireTag {
    WireTag {
        field,
        tag,
        omit_when_empty,
    }
}

/// В порядке схемы.
pub const GROUP_HEADER3_TAGS: &[WireTag] = &[
    tag("message_identification", "MsgId", false),
    tag("creation_date_time", "CreDtTm", false),
    tag("authorisation", "Authstn", true),
    tag("batch_booking", "BtchBookg", true),
    tag("number_of_transactions", "NbOfTxs", false),
    tag("control_sum", "CtrlSum", true),
    tag("total_interbank_settlement_amount", "TtlIntrBkSttlmAmt", true),
    tag("interbank_settlement_date", "IntrBkSttlmDt", true),
    tag("settlement_information", "SttlmInf", false),
    tag("payment_type_information", "PmtTpInf", true),
    tag("instructing_agent", "InstgAgt", true),
    tag("instructed_agent", "InstdAgt", true),
];

pub fn wire_tag(field: &str) -> Option<&'static WireTag> {
    GROUP_HEADER3_TAGS.iter().find(|t| t.field == field)
}

pub fn field_for_tag(tag: &str) -> Option<&'static WireTag> {
    GROUP_HEADER3_TAGS.iter().find(|t| t.tag == tag)
}
