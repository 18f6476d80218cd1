//! Text encoded into the QR codes
//!
//! The payloads are plain UTF-8 lines. They never enter the markup, so they
//! are not XML-escaped.

use crate::config::CompanyProfile;
use crate::core::string::format_area;
use crate::labels::{Labels, short_date_time};
use crate::meeting::VoteRecord;

/// Company verification block, rendered once per protocol
pub fn company_payload(company: &CompanyProfile, labels: &Labels) -> String {
    let mut lines = vec![company.name.clone()];
    let mut push = |caption: &str, value: &str| {
        if !value.trim().is_empty() {
            lines.push(format!("{}: {}", caption, value));
        }
    };
    push(labels.company_registration, &company.registration_number);
    push(labels.company_bank, &company.bank_name);
    push(labels.company_bank_code, &company.bank_code);
    push(labels.company_account, &company.account);
    push(labels.company_address, &company.address);
    push(labels.company_phone, company.phone.as_deref().unwrap_or_default());
    push(labels.company_email, company.email.as_deref().unwrap_or_default());
    lines.join("\n")
}

/// A voter's receipt for one protocol
pub fn voter_receipt_payload(protocol_number: &str, vote: &VoteRecord, labels: &Labels) -> String {
    let apartment = vote.apartment_number.as_deref().unwrap_or("-");
    [
        format!("{} {}", labels.receipt_protocol, protocol_number),
        format!("{}: {}", labels.receipt_voter, vote.voter_name),
        format!("{}: {}", labels.receipt_apartment, apartment),
        format!(
            "{}: {} {}",
            labels.receipt_area,
            format_area(vote.vote_weight),
            labels.area_unit
        ),
        format!("{}: {}", labels.receipt_choice, labels.choice(vote.choice)),
        format!("{}: {}", labels.receipt_time, short_date_time(&vote.voted_at)),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::Locale;
    use crate::meeting::VoteChoice;
    use chrono::DateTime;

    fn vote() -> VoteRecord {
        VoteRecord {
            voter_id: "v-9".to_string(),
            voter_name: "Сидорова А. & Co".to_string(),
            apartment_number: Some("12А".to_string()),
            vote_weight: 54.3,
            choice: VoteChoice::Against,
            voted_at: DateTime::parse_from_rfc3339("2026-03-04T09:15:00+05:00").unwrap(),
            comment: None,
        }
    }

    #[test]
    fn test_voter_receipt_ru() {
        let payload = voter_receipt_payload("17", &vote(), Locale::Ru.labels());
        assert_eq!(
            payload,
            "Протокол № 17\nСобственник: Сидорова А. & Co\nКвартира: 12А\n\
             Площадь: 54.30 м²\nГолос: Против\nВремя: 04.03.2026, 09:15"
        );
    }

    #[test]
    fn test_voter_receipt_without_apartment() {
        let mut v = vote();
        v.apartment_number = None;
        let payload = voter_receipt_payload("17", &v, Locale::Kk.labels());
        assert!(payload.contains("Пәтер: -"));
        assert!(payload.contains("Дауыс: Қарсымын"));
    }

    #[test]
    fn test_company_payload_skips_blank_fields() {
        let company = CompanyProfile {
            name: "ТОО «Уютный дом»".to_string(),
            registration_number: "123456789012".to_string(),
            account: "KZ000000000000000000".to_string(),
            phone: Some("+7 727 000 00 00".to_string()),
            ..CompanyProfile::default()
        };
        let payload = company_payload(&company, Locale::Ru.labels());
        assert_eq!(
            payload,
            "ТОО «Уютный дом»\nБИН: 123456789012\nИИК: KZ000000000000000000\nТелефон: +7 727 000 00 00"
        );
    }
}
