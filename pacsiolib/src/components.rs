//! Вложенные фрагменты заголовка: расчёты, тип платежа, идентификация агентов.
//!
//! Группы выбора («ровно одно из») — обычные структуры из `Option`;
//! какую ветку заполнять, решает вызывающий.

use crate::types::{
    BbanIdentifier, BicIdentifier, CashClearingSystem3Code, CategoryPurpose1Code,
    ClearingChannel2Code, CountryCode, CurrencyCode, IbanIdentifier, Max34Text, Max35Text,
    Max70Text, Priority2Code, ServiceLevel1Code, SettlementMethod1Code,
};
use serde::{Deserialize, Serialize};

/* ----------------------------- settlement -------------------------------- */

/// Как проводятся расчёты между инструктирующим и инструктируемым агентом.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettlementInformation2 {
    #[serde(rename = "SttlmMtd", default, skip_serializing_if = "Option::is_none")]
    pub settlement_method: Option<SettlementMethod1Code>,

    #[serde(rename = "SttlmAcct", default, skip_serializing_if = "Option::is_none")]
    pub settlement_account: Option<CashAccount7>,

    #[serde(rename = "ClrSys", default, skip_serializing_if = "Option::is_none")]
    pub clearing_system: Option<ClearingSystemIdentification1Choice>,
}

impl SettlementInformation2 {
    pub fn set_settlement_method(&mut self, value: impl Into<SettlementMethod1Code>) {
        self.settlement_method = Some(value.into());
    }

    pub fn add_settlement_account(&mut self) -> &mut CashAccount7 {
        self.settlement_account.insert(CashAccount7::default())
    }

    pub fn add_clearing_system(&mut self) -> &mut ClearingSystemIdentification1Choice {
        self.clearing_system
            .insert(ClearingSystemIdentification1Choice::default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashAccount7 {
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub identification: Option<AccountIdentification3Choice>,

    #[serde(rename = "Ccy", default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<CurrencyCode>,

    #[serde(rename = "Nm", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Max70Text>,
}

impl CashAccount7 {
    pub fn add_identification(&mut self) -> &mut AccountIdentification3Choice {
        self.identification
            .insert(AccountIdentification3Choice::default())
    }

    pub fn set_currency(&mut self, value: impl Into<CurrencyCode>) {
        self.currency = Some(value.into());
    }

    pub fn set_name(&mut self, value: impl Into<Max70Text>) {
        self.name = Some(value.into());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountIdentification3Choice {
    #[serde(rename = "IBAN", default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<IbanIdentifier>,

    #[serde(rename = "BBAN", default, skip_serializing_if = "Option::is_none")]
    pub bban: Option<BbanIdentifier>,

    #[serde(rename = "PrtryAcct", default, skip_serializing_if = "Option::is_none")]
    pub proprietary_account: Option<ProprietaryAccount>,
}

impl AccountIdentification3Choice {
    pub fn set_iban(&mut self, value: impl Into<IbanIdentifier>) {
        self.iban = Some(value.into());
    }

    pub fn set_bban(&mut self, value: impl Into<BbanIdentifier>) {
        self.bban = Some(value.into());
    }

    pub fn add_proprietary_account(&mut self) -> &mut ProprietaryAccount {
        self.proprietary_account.insert(ProprietaryAccount::default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProprietaryAccount {
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub identification: Option<Max34Text>,
}

impl ProprietaryAccount {
    pub fn set_identification(&mut self, value: impl Into<Max34Text>) {
        self.identification = Some(value.into());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClearingSystemIdentification1Choice {
    #[serde(rename = "ClrSysId", default, skip_serializing_if = "Option::is_none")]
    pub clearing_system_identification: Option<CashClearingSystem3Code>,

    #[serde(rename = "Prtry", default, skip_serializing_if = "Option::is_none")]
    pub proprietary: Option<Max35Text>,
}

impl ClearingSystemIdentification1Choice {
    pub fn set_clearing_system_identification(
        &mut self,
        value: impl Into<CashClearingSystem3Code>,
    ) {
        self.clearing_system_identification = Some(value.into());
    }

    pub fn set_proprietary(&mut self, value: impl Into<Max35Text>) {
        self.proprietary = Some(value.into());
    }
}

/* ----------------------------- payment type ------------------------------ */

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentTypeInformation4 {
    #[serde(rename = "InstrPrty", default, skip_serializing_if = "Option::is_none")]
    pub instruction_priority: Option<Priority2Code>,

    #[serde(rename = "SvcLvl", default, skip_serializing_if = "Option::is_none")]
    pub service_level: Option<ServiceLevel2Choice>,

    #[serde(rename = "ClrChanl", default, skip_serializing_if = "Option::is_none")]
    pub clearing_channel: Option<ClearingChannel2Code>,

    #[serde(rename = "LclInstrm", default, skip_serializing_if = "Option::is_none")]
    pub local_instrument: Option<LocalInstrument1Choice>,

    #[serde(rename = "CtgyPurp", default, skip_serializing_if = "Option::is_none")]
    pub category_purpose: Option<CategoryPurpose1Code>,
}

impl PaymentTypeInformation4 {
    pub fn set_instruction_priority(&mut self, value: impl Into<Priority2Code>) {
        self.instruction_priority = Some(value.into());
    }

    pub fn add_service_level(&mut self) -> &mut ServiceLevel2Choice {
        self.service_level.insert(ServiceLevel2Choice::default())
    }

    pub fn set_clearing_channel(&mut self, value: impl Into<ClearingChannel2Code>) {
        self.clearing_channel = Some(value.into());
    }

    pub fn add_local_instrument(&mut self) -> &mut LocalInstrument1Choice {
        self.local_instrument.insert(LocalInstrument1Choice::default())
    }

    pub fn set_category_purpose(&mut self, value: impl Into<CategoryPurpose1Code>) {
        self.category_purpose = Some(value.into());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceLevel2Choice {
    #[serde(rename = "Cd", default, skip_serializing_if = "Option::is_none")]
    pub code: Option<ServiceLevel1Code>,

    #[serde(rename = "Prtry", default, skip_serializing_if = "Option::is_none")]
    pub proprietary: Option<Max35Text>,
}

impl ServiceLevel2Choice {
    pub fn set_code(&mut self, value: impl Into<ServiceLevel1Code>) {
        self.code = Some(value.into());
    }

    pub fn set_proprietary(&mut self, value: impl Into<Max35Text>) {
        self.proprietary = Some(value.into());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalInstrument1Choice {
    #[serde(rename = "Cd", default, skip_serializing_if = "Option::is_none")]
    pub code: Option<Max35Text>,

    #[serde(rename = "Prtry", default, skip_serializing_if = "Option::is_none")]
    pub proprietary: Option<Max35Text>,
}

impl LocalInstrument1Choice {
    pub fn set_code(&mut self, value: impl Into<Max35Text>) {
        self.code = Some(value.into());
    }

    pub fn set_proprietary(&mut self, value: impl Into<Max35Text>) {
        self.proprietary = Some(value.into());
    }
}

/* --------------------------------- agents -------------------------------- */

/// Финансовый институт и (необязательно) его филиал.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BranchAndFinancialInstitutionIdentification3 {
    #[serde(rename = "FinInstnId", default, skip_serializing_if = "Option::is_none")]
    pub financial_institution_identification: Option<FinancialInstitutionIdentification5Choice>,

    #[serde(rename = "BrnchId", default, skip_serializing_if = "Option::is_none")]
    pub branch_identification: Option<BranchData>,
}

impl BranchAndFinancialInstitutionIdentification3 {
    pub fn add_financial_institution_identification(
        &mut self,
    ) -> &mut FinancialInstitutionIdentification5Choice {
        self.financial_institution_identification
            .insert(FinancialInstitutionIdentification5Choice::default())
    }

    pub fn add_branch_identification(&mut self) -> &mut BranchData {
        self.branch_identification.insert(BranchData::default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialInstitutionIdentification5Choice {
    #[serde(rename = "BIC", default, skip_serializing_if = "Option::is_none")]
    pub bic: Option<BicIdentifier>,

    #[serde(rename = "ClrSysMmbId", default, skip_serializing_if = "Option::is_none")]
    pub clearing_system_member_identification: Option<ClearingSystemMemberIdentification3>,

    #[serde(rename = "NmAndAdr", default, skip_serializing_if = "Option::is_none")]
    pub name_and_address: Option<NameAndAddress7>,

    #[serde(rename = "PrtryId", default, skip_serializing_if = "Option::is_none")]
    pub proprietary_identification: Option<GenericIdentification3>,
}

impl FinancialInstitutionIdentification5Choice {
    pub fn set_bic(&mut self, value: impl Into<BicIdentifier>) {
        self.bic = Some(value.into());
    }

    pub fn add_clearing_system_member_identification(
        &mut self,
    ) -> &mut ClearingSystemMemberIdentification3 {
        self.clearing_system_member_identification
            .insert(ClearingSystemMemberIdentification3::default())
    }

    pub fn add_name_and_address(&mut self) -> &mut NameAndAddress7 {
        self.name_and_address.insert(NameAndAddress7::default())
    }

    pub fn add_proprietary_identification(&mut self) -> &mut GenericIdentification3 {
        self.proprietary_identification
            .insert(GenericIdentification3::default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClearingSystemMemberIdentification3 {
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub identification: Option<Max35Text>,
}

impl ClearingSystemMemberIdentification3 {
    pub fn set_identification(&mut self, value: impl Into<Max35Text>) {
        self.identification = Some(value.into());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NameAndAddress7 {
    #[serde(rename = "Nm", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Max70Text>,

    #[serde(rename = "PstlAdr", default, skip_serializing_if = "Option::is_none")]
    pub postal_address: Option<PostalAddress1>,
}

impl NameAndAddress7 {
    pub fn set_name(&mut self, value: impl Into<Max70Text>) {
        self.name = Some(value.into());
    }

    pub fn add_postal_address(&mut self) -> &mut PostalAddress1 {
        self.postal_address.insert(PostalAddress1::default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostalAddress1 {
    #[serde(rename = "AdrLine", default, skip_serializing_if = "Vec::is_empty")]
    pub address_line: Vec<Max70Text>,

    #[serde(rename = "Ctry", default, skip_serializing_if = "Option::is_none")]
    pub country: Option<CountryCode>,
}

impl PostalAddress1 {
    pub fn add_address_line(&mut self, value: impl Into<Max70Text>) {
        self.address_line.push(value.into());
    }

    pub fn set_country(&mut self, value: impl Into<CountryCode>) {
        self.country = Some(value.into());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenericIdentification3 {
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub identification: Option<Max35Text>,

    #[serde(rename = "Issr", default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<Max35Text>,
}

impl GenericIdentification3 {
    pub fn set_identification(&mut self, value: impl Into<Max35Text>) {
        self.identification = Some(value.into());
    }

    pub fn set_issuer(&mut self, value: impl Into<Max35Text>) {
        self.issuer = Some(value.into());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BranchData {
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub identification: Option<Max35Text>,

    #[serde(rename = "Nm", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Max70Text>,
}

impl BranchData {
    pub fn set_identification(&mut self, value: impl Into<Max35Text>) {
        self.identification = Some(value.into());
    }

    pub fn set_name(&mut self, value: impl Into<Max70Text>) {
        self.name = Some(value.into());
    }
}
