//! Fixed document strings for the two supported locales
//!
//! Free-text fields (names, titles, addresses) arrive already written in the
//! meeting's language. Only the protocol's own captions, month names and
//! choice names are translated here.

use crate::core::error::DomainError;
use crate::meeting::{MeetingFormat, VoteChoice};
use chrono::{DateTime, Datelike, FixedOffset};
use serde::{Deserialize, Serialize};

/// Document locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Russian
    #[default]
    Ru,
    /// Kazakh
    Kk,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::Kk => "kk",
        }
    }

    /// Captions for this locale
    pub fn labels(&self) -> &'static Labels {
        match self {
            Locale::Ru => &RU,
            Locale::Kk => &KK,
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ru" | "rus" | "russian" => Ok(Locale::Ru),
            "kk" | "kz" | "kaz" | "kazakh" => Ok(Locale::Kk),
            other => Err(DomainError::InvalidLocale(other.to_string())),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every caption the protocol prints
#[derive(Debug)]
pub struct Labels {
    pub protocol_title: &'static str,
    pub protocol_subtitle: &'static str,
    pub date: &'static str,
    pub venue: &'static str,
    pub organizer: &'static str,
    pub format_in_person: &'static str,
    pub format_absentee: &'static str,
    pub format_mixed: &'static str,
    pub total_area: &'static str,
    pub voted_area: &'static str,
    pub participation: &'static str,
    pub required_quorum: &'static str,
    pub quorum_reached: &'static str,
    pub quorum_not_reached: &'static str,
    pub agenda_heading: &'static str,
    pub item_prefix: &'static str,
    pub chair_election_title: &'static str,
    pub chair_election_description: &'static str,
    pub choice_for: &'static str,
    pub choice_against: &'static str,
    pub choice_abstain: &'static str,
    pub area_unit: &'static str,
    pub voters_heading: &'static str,
    pub column_number: &'static str,
    pub column_name: &'static str,
    pub column_apartment: &'static str,
    pub column_area: &'static str,
    pub column_date: &'static str,
    pub column_choice: &'static str,
    pub column_justification: &'static str,
    pub column_signature: &'static str,
    pub decision_prefix: &'static str,
    pub decision_adopted: &'static str,
    pub decision_rejected: &'static str,
    pub appendix_title: &'static str,
    pub appendix_subtitle: &'static str,
    pub chair_signature: &'static str,
    pub secretary_signature: &'static str,
    pub receipt_protocol: &'static str,
    pub receipt_voter: &'static str,
    pub receipt_apartment: &'static str,
    pub receipt_area: &'static str,
    pub receipt_choice: &'static str,
    pub receipt_time: &'static str,
    pub company_registration: &'static str,
    pub company_bank: &'static str,
    pub company_bank_code: &'static str,
    pub company_account: &'static str,
    pub company_address: &'static str,
    pub company_phone: &'static str,
    pub company_email: &'static str,
    pub year_suffix: &'static str,
    /// Month names in the form used after a day number
    pub months: [&'static str; 12],
}

impl Labels {
    /// Translated vote choice
    pub fn choice(&self, choice: VoteChoice) -> &'static str {
        match choice {
            VoteChoice::For => self.choice_for,
            VoteChoice::Against => self.choice_against,
            VoteChoice::Abstain => self.choice_abstain,
        }
    }

    /// Translated meeting format
    pub fn format(&self, format: MeetingFormat) -> &'static str {
        match format {
            MeetingFormat::InPerson => self.format_in_person,
            MeetingFormat::Absentee => self.format_absentee,
            MeetingFormat::Mixed => self.format_mixed,
        }
    }

    /// Month name for a 1-based month number
    pub fn month(&self, month: u32) -> &'static str {
        let index = month.clamp(1, 12) as usize - 1;
        self.months[index]
    }

    /// Long date such as `«5» марта 2026 г.`
    pub fn long_date(&self, at: &DateTime<FixedOffset>) -> String {
        format!(
            "«{}» {} {}{}",
            at.day(),
            self.month(at.month()),
            at.year(),
            self.year_suffix
        )
    }
}

/// Short numeric date used in tables, e.g. `05.03.2026`
pub fn short_date(at: &DateTime<FixedOffset>) -> String {
    at.format("%d.%m.%Y").to_string()
}

/// Numeric date and time used in receipts, e.g. `05.03.2026, 18:30`
pub fn short_date_time(at: &DateTime<FixedOffset>) -> String {
    at.format("%d.%m.%Y, %H:%M").to_string()
}

static RU: Labels = Labels {
    protocol_title: "ПРОТОКОЛ №",
    protocol_subtitle: "общего собрания собственников помещений многоквартирного дома",
    date: "Дата",
    venue: "Место и форма проведения",
    organizer: "Инициатор собрания",
    format_in_person: "очная форма",
    format_absentee: "заочная форма",
    format_mixed: "очно-заочная форма",
    total_area: "Общая площадь помещений",
    voted_area: "Площадь принявших участие",
    participation: "Участие",
    required_quorum: "Необходимый кворум",
    quorum_reached: "Кворум имеется, собрание правомочно",
    quorum_not_reached: "Кворум отсутствует, собрание неправомочно",
    agenda_heading: "Повестка дня и результаты голосования",
    item_prefix: "Вопрос",
    chair_election_title: "Избрание председателя и секретаря собрания",
    chair_election_description: "Избрать председателем и секретарём собрания лиц, предложенных инициатором.",
    choice_for: "За",
    choice_against: "Против",
    choice_abstain: "Воздержался",
    area_unit: "м²",
    voters_heading: "Поимённые результаты голосования",
    column_number: "№",
    column_name: "Ф.И.О.",
    column_apartment: "Кв.",
    column_area: "Площадь, м²",
    column_date: "Дата",
    column_choice: "Голос",
    column_justification: "Обоснование",
    column_signature: "Подпись",
    decision_prefix: "Решение",
    decision_adopted: "ПРИНЯТО",
    decision_rejected: "НЕ ПРИНЯТО",
    appendix_title: "Приложение № 1",
    appendix_subtitle: "Реестр подписей собственников",
    chair_signature: "Председатель собрания",
    secretary_signature: "Секретарь собрания",
    receipt_protocol: "Протокол №",
    receipt_voter: "Собственник",
    receipt_apartment: "Квартира",
    receipt_area: "Площадь",
    receipt_choice: "Голос",
    receipt_time: "Время",
    company_registration: "БИН",
    company_bank: "Банк",
    company_bank_code: "БИК",
    company_account: "ИИК",
    company_address: "Адрес",
    company_phone: "Телефон",
    company_email: "E-mail",
    year_suffix: " г.",
    months: [
        "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа",
        "сентября", "октября", "ноября", "декабря",
    ],
};

static KK: Labels = Labels {
    protocol_title: "ХАТТАМА №",
    protocol_subtitle: "көппәтерлі тұрғын үй үй-жайлары меншік иелерінің жалпы жиналысы",
    date: "Күні",
    venue: "Өткізу орны мен нысаны",
    organizer: "Жиналыс бастамашысы",
    format_in_person: "бетпе-бет нысаны",
    format_absentee: "сырттай нысаны",
    format_mixed: "аралас нысаны",
    total_area: "Үй-жайлардың жалпы ауданы",
    voted_area: "Қатысушылардың ауданы",
    participation: "Қатысу",
    required_quorum: "Қажетті кворум",
    quorum_reached: "Кворум бар, жиналыс заңды",
    quorum_not_reached: "Кворум жоқ, жиналыс заңсыз",
    agenda_heading: "Күн тәртібі және дауыс беру нәтижелері",
    item_prefix: "Мәселе",
    chair_election_title: "Жиналыс төрағасы мен хатшысын сайлау",
    chair_election_description: "Бастамашы ұсынған тұлғаларды жиналыс төрағасы мен хатшысы етіп сайлау.",
    choice_for: "Қолдаймын",
    choice_against: "Қарсымын",
    choice_abstain: "Қалыс қалдым",
    area_unit: "м²",
    voters_heading: "Атаулы дауыс беру нәтижелері",
    column_number: "№",
    column_name: "Т.А.Ә.",
    column_apartment: "Пәтер",
    column_area: "Аудан, м²",
    column_date: "Күні",
    column_choice: "Дауыс",
    column_justification: "Негіздеме",
    column_signature: "Қолы",
    decision_prefix: "Шешім",
    decision_adopted: "ҚАБЫЛДАНДЫ",
    decision_rejected: "ҚАБЫЛДАНБАДЫ",
    appendix_title: "№ 1 қосымша",
    appendix_subtitle: "Меншік иелерінің қолдар тізілімі",
    chair_signature: "Жиналыс төрағасы",
    secretary_signature: "Жиналыс хатшысы",
    receipt_protocol: "Хаттама №",
    receipt_voter: "Меншік иесі",
    receipt_apartment: "Пәтер",
    receipt_area: "Аудан",
    receipt_choice: "Дауыс",
    receipt_time: "Уақыты",
    company_registration: "БСН",
    company_bank: "Банк",
    company_bank_code: "БСК",
    company_account: "ЖСК",
    company_address: "Мекенжай",
    company_phone: "Телефон",
    company_email: "E-mail",
    year_suffix: " ж.",
    months: [
        "қаңтар", "ақпан", "наурыз", "сәуір", "мамыр", "маусым", "шілде", "тамыз",
        "қыркүйек", "қазан", "қараша", "желтоқсан",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_parse_locale() {
        assert_eq!("ru".parse::<Locale>().ok(), Some(Locale::Ru));
        assert_eq!("KZ".parse::<Locale>().ok(), Some(Locale::Kk));
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn test_long_date_uses_genitive_month() {
        let date = at("2026-03-05T18:30:00+05:00");
        assert_eq!(Locale::Ru.labels().long_date(&date), "«5» марта 2026 г.");
        assert_eq!(Locale::Kk.labels().long_date(&date), "«5» наурыз 2026 ж.");
    }

    #[test]
    fn test_short_dates_keep_offset_local_time() {
        let date = at("2026-12-31T23:05:00+06:00");
        assert_eq!(short_date(&date), "31.12.2026");
        assert_eq!(short_date_time(&date), "31.12.2026, 23:05");
    }

    #[test]
    fn test_choice_translation() {
        let ru = Locale::Ru.labels();
        assert_eq!(ru.choice(VoteChoice::For), "За");
        assert_eq!(ru.choice(VoteChoice::Abstain), "Воздержался");
        let kk = Locale::Kk.labels();
        assert_eq!(kk.choice(VoteChoice::Against), "Қарсымын");
    }

    #[test]
    fn test_month_bounds() {
        let ru = Locale::Ru.labels();
        assert_eq!(ru.month(1), "января");
        assert_eq!(ru.month(12), "декабря");
        assert_eq!(ru.month(0), "января");
    }

    #[test]
    fn test_locale_serde() {
        let json = serde_json::to_string(&Locale::Kk).unwrap();
        assert_eq!(json, "\"kk\"");
    }
}
