//! `GroupHeader3` — заголовок пакета, общий для всех транзакций сообщения.

use crate::components::{
    BranchAndFinancialInstitutionIdentification3, PaymentTypeInformation4, SettlementInformation2,
};
use crate::types::{
    BatchBookingIndicator, CurrencyAndAmount, DecimalNumber, IsoDate, IsoDateTime, Max128Text,
    Max15NumericText, Max35Text,
};
use serde::{Deserialize, Serialize};

/// Заголовок пакета межбанковского платёжного сообщения (FI-to-FI).
///
/// Поля заполняются по одному через сеттеры, без проверок: пустое
/// обязательное поле просто не попадает в XML/JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "GrpHdr")]
pub struct GroupHeader3 {
    /// Уникальность в пределах получателя и оговорённого срока — забота вызывающего.
    #[serde(rename = "MsgId", default, skip_serializing_if = "Option::is_none")]
    pub message_identification: Option<Max35Text>,

    #[serde(rename = "CreDtTm", default, skip_serializing_if = "Option::is_none")]
    pub creation_date_time: Option<IsoDateTime>,

    #[serde(rename = "Authstn", default, skip_serializing_if = "Vec::is_empty")]
    pub authorisation: Vec<Max128Text>,

    #[serde(rename = "BtchBookg", default, skip_serializing_if = "Option::is_none")]
    pub batch_booking: Option<BatchBookingIndicator>,

    #[serde(rename = "NbOfTxs", default, skip_serializing_if = "Option::is_none")]
    pub number_of_transactions: Option<Max15NumericText>,

    /// Сумма всех транзакций без учёта валюты.
    #[serde(rename = "CtrlSum", default, skip_serializing_if = "Option::is_none")]
    pub control_sum: Option<DecimalNumber>,

    #[serde(rename = "TtlIntrBkSttlmAmt", default, skip_serializing_if = "Option::is_none")]
    pub total_interbank_settlement_amount: Option<CurrencyAndAmount>,

    #[serde(rename = "IntrBkSttlmDt", default, skip_serializing_if = "Option::is_none")]
    pub interbank_settlement_date: Option<IsoDate>,

    #[serde(rename = "SttlmInf", default, skip_serializing_if = "Option::is_none")]
    pub settlement_information: Option<SettlementInformation2>,

    #[serde(rename = "PmtTpInf", default, skip_serializing_if = "Option::is_none")]
    pub payment_type_information: Option<PaymentTypeInformation4>,

    #[serde(rename = "InstgAgt", default, skip_serializing_if = "Option::is_none")]
    pub instructing_agent: Option<BranchAndFinancialInstitutionIdentification3>,

    #[serde(rename = "InstdAgt", default, skip_serializing_if = "Option::is_none")]
    pub instructed_agent: Option<BranchAndFinancialInstitutionIdentification3>,
}

impl GroupHeader3 {
    pub fn new() -> Self {
        Self::default()
    }

    /// `MsgId` как строка — для логов.
    pub fn message_id(&self) -> Option<&str> {
        self.message_identification.as_ref().map(|m| m.as_str())
    }

    pub fn set_message_identification(&mut self, value: impl Into<Max35Text>) {
        self.message_identification = Some(value.into());
    }

    pub fn set_creation_date_time(&mut self, value: impl Into<IsoDateTime>) {
        self.creation_date_time = Some(value.into());
    }

    pub fn add_authorisation(&mut self, value: impl Into<Max128Text>) {
        self.authorisation.push(value.into());
    }

    pub fn set_batch_booking(&mut self, value: impl Into<BatchBookingIndicator>) {
        self.batch_booking = Some(value.into());
    }

    pub fn set_number_of_transactions(&mut self, value: impl Into<Max15NumericText>) {
        self.number_of_transactions = Some(value.into());
    }

    pub fn set_control_sum(&mut self, value: impl Into<DecimalNumber>) {
        self.control_sum = Some(value.into());
    }

    pub fn set_total_interbank_settlement_amount(
        &mut self,
        value: impl Into<String>,
        currency: impl Into<String>,
    ) {
        self.total_interbank_settlement_amount = Some(CurrencyAndAmount::new(value, currency));
    }

    pub fn set_interbank_settlement_date(&mut self, value: impl Into<IsoDate>) {
        self.interbank_settlement_date = Some(value.into());
    }

    /// Заменяет SttlmInf пустой записью и возвращает её для заполнения.
    pub fn add_settlement_information(&mut self) -> &mut SettlementInformation2 {
        replaced("SttlmInf", self.settlement_information.is_some());
        self.settlement_information.insert(SettlementInformation2::default())
    }

    pub fn add_payment_type_information(&mut self) -> &mut PaymentTypeInformation4 {
        replaced("PmtTpInf", self.payment_type_information.is_some());
        self.payment_type_information.insert(PaymentTypeInformation4::default())
    }

    pub fn add_instructing_agent(&mut self) -> &mut BranchAndFinancialInstitutionIdentification3 {
        replaced("InstgAgt", self.instructing_agent.is_some());
        self.instructing_agent.insert(Default::default())
    }

    pub fn add_instructed_agent(&mut self) -> &mut BranchAndFinancialInstitutionIdentification3 {
        replaced("InstdAgt", self.instructed_agent.is_some());
        self.instructed_agent.insert(Default::default())
    }
}

fn replaced(tag: &str, had_value: bool) {
    if had_value {
        tracing::trace!(tag, "dropping previous nested record");
    }
}
