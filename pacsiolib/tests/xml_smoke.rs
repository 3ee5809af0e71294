use pacsiolib::{
    error::PacsError,
    formats::xml::Xml,
    traits::{ReadFormat, WriteFormat},
    GroupHeader3,
};
use std::io::Cursor;

#[test]
fn xml_write_then_read_back() {
    let mut hdr = GroupHeader3::new();
    hdr.set_message_identification("BATCH-7");
    hdr.set_creation_date_time("2024-03-01T09:30:00");
    hdr.add_authorisation("ops-desk");
    hdr.add_authorisation("treasury");
    hdr.set_number_of_transactions("2");
    hdr.set_total_interbank_settlement_amount("250.00", "EUR");

    let sttl = hdr.add_settlement_information();
    sttl.set_settlement_method("INDA");
    sttl.add_settlement_account()
        .add_identification()
        .set_iban("DE89370400440532013000");

    let agent = hdr.add_instructing_agent();
    let fi = agent.add_financial_institution_identification();
    let na = fi.add_name_and_address();
    na.set_name("Example Bank");
    let adr = na.add_postal_address();
    adr.add_address_line("Main Street 1");
    adr.add_address_line("Frankfurt");
    adr.set_country("DE");

    let mut buf = Vec::new();
    Xml::write(&mut buf, &hdr).expect("write xml");
    let text = String::from_utf8(buf.clone()).expect("utf-8");
    assert!(text.starts_with("<?xml"));
    assert!(text.contains(r#"Ccy="EUR""#));

    let back = Xml::read(Cursor::new(buf)).expect("read xml");
    assert_eq!(back, hdr);
}

#[test]
fn xml_reads_hand_written_header() {
    let src = r#"<?xml version="1.0" encoding="UTF-8"?>
<GrpHdr>
  <MsgId>ABC123</MsgId>
  <CreDtTm>2024-03-01T09:30:00</CreDtTm>
  <NbOfTxs>1</NbOfTxs>
  <TtlIntrBkSttlmAmt Ccy="USD">10.00</TtlIntrBkSttlmAmt>
  <SttlmInf>
    <SttlmMtd>CLRG</SttlmMtd>
    <ClrSys><ClrSysId>TGT</ClrSysId></ClrSys>
  </SttlmInf>
</GrpHdr>"#;

    let hdr = Xml::read(Cursor::new(src)).expect("read xml");
    assert_eq!(hdr.message_identification.unwrap().as_str(), "ABC123");
    let amt = hdr.total_interbank_settlement_amount.unwrap();
    assert_eq!((amt.value(), amt.currency()), ("10.00", "USD"));
    let clr = hdr.settlement_information.unwrap().clearing_system.unwrap();
    assert_eq!(clr.clearing_system_identification.unwrap().as_str(), "TGT");
    assert!(hdr.authorisation.is_empty());
    assert!(hdr.instructed_agent.is_none());
}

#[test]
fn truncated_xml_is_an_error() {
    let err = Xml::read(Cursor::new("<GrpHdr><MsgId>X</MsgId>")).unwrap_err();
    assert!(matches!(err, PacsError::Xml(_)));
}

fn xml_round_trip(hdr: &GroupHeader3) -> (String, GroupHeader3) {
    let mut buf = Vec::new();
    Xml::write(&mut buf, hdr).expect("write xml");
    let text = String::from_utf8(buf.clone()).expect("utf-8");
    let back = Xml::read(Cursor::new(buf)).expect("read xml");
    (text, back)
}

#[test]
fn empty_header_writes_no_elements_and_reads_back_empty() {
    let hdr = GroupHeader3::new();
    let (text, back) = xml_round_trip(&hdr);

    for tag in ["<MsgId", "<CreDtTm", "<NbOfTxs", "<SttlmInf"] {
        assert!(!text.contains(tag), "unexpected {tag} in {text}");
    }
    assert_eq!(back, hdr);
}

#[test]
fn freshly_added_children_survive_round_trip() {
    let mut hdr = GroupHeader3::new();
    hdr.add_settlement_information();
    hdr.add_instructed_agent();

    let (text, back) = xml_round_trip(&hdr);
    assert!(!text.contains("<SttlmMtd"));
    assert!(!text.contains("<FinInstnId"));
    assert_eq!(back, hdr);
}

#[test]
fn empty_amount_reads_back() {
    let mut hdr = GroupHeader3::new();
    hdr.set_total_interbank_settlement_amount("", "");

    let (_, back) = xml_round_trip(&hdr);
    let amt = back.total_interbank_settlement_amount.expect("amount kept");
    assert_eq!((amt.value(), amt.currency()), ("", ""));
}

#[test]
fn xml_trims_edge_whitespace_in_text() {
    let mut hdr = GroupHeader3::new();
    hdr.add_authorisation("  spaced  ");

    let (text, back) = xml_round_trip(&hdr);
    assert!(text.contains("  spaced  "));
    assert_eq!(back.authorisation[0].as_str(), "spaced");
}
