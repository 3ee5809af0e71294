use pacsiolib::{components::SettlementInformation2, GroupHeader3};

#[test]
fn settlement_account_and_clearing_system() {
    let mut sttl = SettlementInformation2::default();
    sttl.set_settlement_method("COVE");
    let acct = sttl.add_settlement_account();
    acct.set_currency("EUR");
    acct.set_name("Nostro");
    acct.add_identification()
        .add_proprietary_account()
        .set_identification("ACC-99");
    sttl.add_clearing_system().set_proprietary("LOCALCLR");

    let acct = sttl.settlement_account.as_ref().unwrap();
    assert_eq!(acct.currency.as_ref().unwrap().as_str(), "EUR");
    let id = acct.identification.as_ref().unwrap();
    assert!(id.iban.is_none());
    assert_eq!(
        id.proprietary_account
            .as_ref()
            .and_then(|p| p.identification.as_ref())
            .map(|i| i.as_str()),
        Some("ACC-99")
    );
    assert_eq!(
        sttl.clearing_system.unwrap().proprietary.unwrap().as_str(),
        "LOCALCLR"
    );
}

#[test]
fn choice_branches_are_not_exclusive() {
    let mut hdr = GroupHeader3::new();
    let id = hdr
        .add_settlement_information()
        .add_settlement_account()
        .add_identification();
    id.set_iban("DE89370400440532013000");
    id.set_bban("370400440532013000");

    let id = hdr
        .settlement_information
        .unwrap()
        .settlement_account
        .unwrap()
        .identification
        .unwrap();
    assert!(id.iban.is_some() && id.bban.is_some());
}

#[test]
fn payment_type_information_fields() {
    let mut hdr = GroupHeader3::new();
    let pti = hdr.add_payment_type_information();
    pti.set_instruction_priority("HIGH");
    pti.set_clearing_channel("RTGS");
    pti.set_category_purpose("CASH");
    pti.add_service_level().set_proprietary("URGENT");
    let lcl = pti.add_local_instrument();
    lcl.set_code("CORE");
    lcl.set_proprietary("B2B");

    let pti = hdr.payment_type_information.unwrap();
    assert_eq!(pti.instruction_priority.unwrap().as_str(), "HIGH");
    assert_eq!(pti.clearing_channel.unwrap().as_str(), "RTGS");
    assert_eq!(pti.category_purpose.unwrap().as_str(), "CASH");
    assert!(pti.service_level.as_ref().unwrap().code.is_none());
    let lcl = pti.local_instrument.unwrap();
    assert_eq!(lcl.code.unwrap().as_str(), "CORE");
    assert_eq!(lcl.proprietary.unwrap().as_str(), "B2B");
}

#[test]
fn agent_identification_variants() {
    let mut hdr = GroupHeader3::new();
    let agent = hdr.add_instructed_agent();
    let fi = agent.add_financial_institution_identification();
    fi.add_clearing_system_member_identification()
        .set_identification("USABA021000021");
    let prtry = fi.add_proprietary_identification();
    prtry.set_identification("BANK-7");
    prtry.set_issuer("LOCAL");
    let branch = agent.add_branch_identification();
    branch.set_identification("BR-01");
    branch.set_name("Downtown");

    let agent = hdr.instructed_agent.unwrap();
    let fi = agent.financial_institution_identification.unwrap();
    assert!(fi.bic.is_none());
    assert_eq!(
        fi.clearing_system_member_identification
            .unwrap()
            .identification
            .unwrap()
            .as_str(),
        "USABA021000021"
    );
    let prtry = fi.proprietary_identification.unwrap();
    assert_eq!(prtry.issuer.unwrap().as_str(), "LOCAL");
    let branch = agent.branch_identification.unwrap();
    assert_eq!(branch.name.unwrap().as_str(), "Downtown");
}

#[test]
fn postal_address_lines_keep_order() {
    let mut hdr = GroupHeader3::new();
    let adr = hdr
        .add_instructing_agent()
        .add_financial_institution_identification()
        .add_name_and_address()
        .add_postal_address();
    adr.add_address_line("1 Rue de la Paix");
    adr.add_address_line("75002 Paris");
    adr.set_country("FR");

    let adr = hdr
        .instructing_agent
        .unwrap()
        .financial_institution_identification
        .unwrap()
        .name_and_address
        .unwrap()
        .postal_address
        .unwrap();
    let lines: Vec<&str> = adr.address_line.iter().map(|l| l.as_str()).collect();
    assert_eq!(lines, ["1 Rue de la Paix", "75002 Paris"]);
    assert_eq!(adr.country.unwrap().as_str(), "FR");
}
