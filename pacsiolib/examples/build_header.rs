use pacsiolib::{formats::xml::Xml, traits::WriteFormat, GroupHeader3};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: заголовок пакета pacs.008 из двух транзакций -> XML в stdout
    let mut hdr = GroupHeader3::new();
    hdr.set_message_identification("BATCH-2024-0001");
    hdr.set_creation_date_time("2024-03-01T09:30:00");
    hdr.set_number_of_transactions(2u64);
    hdr.set_control_sum("1500.00");
    hdr.set_total_interbank_settlement_amount("1500.00", "EUR");
    hdr.set_interbank_settlement_date("2024-03-01");
    hdr.add_settlement_information().set_settlement_method("CLRG");
    hdr.add_instructing_agent()
        .add_financial_institution_identification()
        .set_bic("DEUTDEFF");
    hdr.add_instructed_agent()
        .add_financial_institution_identification()
        .set_bic("BNPAFRPP");

    Xml::write(std::io::stdout(), &hdr)?;
    Ok(())
}
