//! Bundled word-based resource data.
//!
//! `CompiledData` answers for the root bundle (`und`, English) and for
//! `en`, `de`, `fr`, `es`, `nl`, `ja`, `pl`, `ru`, and `uk`. Regional
//! bundles are not shipped; they fall back to their language.

use crate::provider::WordBasedProvider;

/// The resource data compiled into this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompiledData;

impl CompiledData {
    /// Returns the bundle identifiers that have compiled data.
    pub fn bundles() -> impl Iterator<Item = &'static str> {
        BUNDLES.iter().map(|(locale, _)| *locale)
    }
}

impl WordBasedProvider for CompiledData {
    fn get(&self, locale: &str, key: &str) -> Option<&str> {
        let (_, bundle) = BUNDLES.iter().find(|(l, _)| *l == locale)?;
        bundle.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }
}

type Bundle = &'static [(&'static str, &'static str)];

static BUNDLES: [(&str, Bundle); 10] = [
    ("und", ENGLISH),
    ("en", ENGLISH),
    ("de", GERMAN),
    ("fr", FRENCH),
    ("es", SPANISH),
    ("nl", DUTCH),
    ("ja", JAPANESE),
    ("pl", POLISH),
    ("ru", RUSSIAN),
    ("uk", UKRAINIAN),
];

const ENGLISH: Bundle = &[
    ("year", " year"),
    ("years", " years"),
    ("month", " month"),
    ("months", " months"),
    ("week", " week"),
    ("weeks", " weeks"),
    ("day", " day"),
    ("days", " days"),
    ("hour", " hour"),
    ("hours", " hours"),
    ("minute", " minute"),
    ("minutes", " minutes"),
    ("second", " second"),
    ("seconds", " seconds"),
    ("millisecond", " millisecond"),
    ("milliseconds", " milliseconds"),
    ("list.separator", ", "),
    ("list.last_separator", " and "),
    ("list.space", " "),
];

const GERMAN: Bundle = &[
    ("year", " Jahr"),
    ("years", " Jahre"),
    ("month", " Monat"),
    ("months", " Monate"),
    ("week", " Woche"),
    ("weeks", " Wochen"),
    ("day", " Tag"),
    ("days", " Tage"),
    ("hour", " Stunde"),
    ("hours", " Stunden"),
    ("minute", " Minute"),
    ("minutes", " Minuten"),
    ("second", " Sekunde"),
    ("seconds", " Sekunden"),
    ("millisecond", " Millisekunde"),
    ("milliseconds", " Millisekunden"),
    ("list.separator", ", "),
    ("list.last_separator", " und "),
    ("list.space", " "),
];

const FRENCH: Bundle = &[
    ("year", " an"),
    ("years", " ans"),
    ("month", " mois"),
    ("months", " mois"),
    ("week", " semaine"),
    ("weeks", " semaines"),
    ("day", " jour"),
    ("days", " jours"),
    ("hour", " heure"),
    ("hours", " heures"),
    ("minute", " minute"),
    ("minutes", " minutes"),
    ("second", " seconde"),
    ("seconds", " secondes"),
    ("millisecond", " milliseconde"),
    ("milliseconds", " millisecondes"),
    ("list.separator", ", "),
    ("list.last_separator", " et "),
    ("list.space", " "),
];

const SPANISH: Bundle = &[
    ("year", " año"),
    ("years", " años"),
    ("month", " mes"),
    ("months", " meses"),
    ("week", " semana"),
    ("weeks", " semanas"),
    ("day", " día"),
    ("days", " días"),
    ("hour", " hora"),
    ("hours", " horas"),
    ("minute", " minuto"),
    ("minutes", " minutos"),
    ("second", " segundo"),
    ("seconds", " segundos"),
    ("millisecond", " milisegundo"),
    ("milliseconds", " milisegundos"),
    ("list.separator", ", "),
    ("list.last_separator", " y "),
    ("list.space", " "),
];

const DUTCH: Bundle = &[
    ("year", " jaar"),
    ("years", " jaar"),
    ("month", " maand"),
    ("months", " maanden"),
    ("week", " week"),
    ("weeks", " weken"),
    ("day", " dag"),
    ("days", " dagen"),
    ("hour", " uur"),
    ("hours", " uur"),
    ("minute", " minuut"),
    ("minutes", " minuten"),
    ("second", " seconde"),
    ("seconds", " seconden"),
    ("millisecond", " milliseconde"),
    ("milliseconds", " milliseconden"),
    ("list.separator", ", "),
    ("list.last_separator", " en "),
    ("list.space", " "),
];

// Japanese has no plural inflection and no list separators.
const JAPANESE: Bundle = &[
    ("year", "年"),
    ("years", "年"),
    ("month", "か月"),
    ("months", "か月"),
    ("week", "週間"),
    ("weeks", "週間"),
    ("day", "日"),
    ("days", "日"),
    ("hour", "時間"),
    ("hours", "時間"),
    ("minute", "分"),
    ("minutes", "分"),
    ("second", "秒"),
    ("seconds", "秒"),
    ("millisecond", "ミリ秒"),
    ("milliseconds", "ミリ秒"),
    ("list.separator", ""),
    ("list.last_separator", ""),
    ("list.space", ""),
];

const POLISH: Bundle = &[
    ("years.predicates", "One|||End234NotTeens"),
    ("years.list", " rok||| lata||| lat"),
    ("months.predicates", "One|||End234NotTeens"),
    ("months.list", " miesiąc||| miesiące||| miesięcy"),
    ("weeks.predicates", "One|||End234NotTeens"),
    ("weeks.list", " tydzień||| tygodnie||| tygodni"),
    ("day", " dzień"),
    ("days", " dni"),
    ("hours.predicates", "One|||End234NotTeens"),
    ("hours.list", " godzina||| godziny||| godzin"),
    ("minutes.predicates", "One|||End234NotTeens"),
    ("minutes.list", " minuta||| minuty||| minut"),
    ("seconds.predicates", "One|||End234NotTeens"),
    ("seconds.list", " sekunda||| sekundy||| sekund"),
    ("milliseconds.predicates", "One|||End234NotTeens"),
    ("milliseconds.list", " milisekunda||| milisekundy||| milisekund"),
    ("list.separator", ", "),
    ("list.last_separator", " i "),
    ("list.space", " "),
];

const RUSSIAN: Bundle = &[
    ("years.predicates", "End1Not11|||End234NotTeens"),
    ("years.list", " год||| года||| лет"),
    ("months.predicates", "End1Not11|||End234NotTeens"),
    ("months.list", " месяц||| месяца||| месяцев"),
    ("weeks.predicates", "End1Not11|||End234NotTeens"),
    ("weeks.list", " неделя||| недели||| недель"),
    ("days.predicates", "End1Not11|||End234NotTeens"),
    ("days.list", " день||| дня||| дней"),
    ("hours.predicates", "End1Not11|||End234NotTeens"),
    ("hours.list", " час||| часа||| часов"),
    ("minutes.predicates", "End1Not11|||End234NotTeens"),
    ("minutes.list", " минута||| минуты||| минут"),
    ("seconds.predicates", "End1Not11|||End234NotTeens"),
    ("seconds.list", " секунда||| секунды||| секунд"),
    ("milliseconds.predicates", "End1Not11|||End234NotTeens"),
    ("milliseconds.list", " миллисекунда||| миллисекунды||| миллисекунд"),
    ("list.separator", ", "),
    ("list.last_separator", " и "),
    ("list.space", " "),
];

const UKRAINIAN: Bundle = &[
    ("years.predicates", "End1Not11|||End234NotTeens"),
    ("years.list", " рік||| роки||| років"),
    ("months.predicates", "End1Not11|||End234NotTeens"),
    ("months.list", " місяць||| місяці||| місяців"),
    ("weeks.predicates", "End1Not11|||End234NotTeens"),
    ("weeks.list", " тиждень||| тижні||| тижнів"),
    ("days.predicates", "End1Not11|||End234NotTeens"),
    ("days.list", " день||| дні||| днів"),
    ("hours.predicates", "End1Not11|||End234NotTeens"),
    ("hours.list", " година||| години||| годин"),
    ("minutes.predicates", "End1Not11|||End234NotTeens"),
    ("minutes.list", " хвилина||| хвилини||| хвилин"),
    ("seconds.predicates", "End1Not11|||End234NotTeens"),
    ("seconds.list", " секунда||| секунди||| секунд"),
    ("milliseconds.predicates", "End1Not11|||End234NotTeens"),
    ("milliseconds.list", " мілісекунда||| мілісекунди||| мілісекунд"),
    ("list.separator", ", "),
    ("list.last_separator", " і "),
    ("list.space", " "),
];

#[cfg(test)]
mod tests {
    use icu_locale::Locale;

    use super::CompiledData;
    use crate::provider::{
        ResourceBundle, WordBasedProvider, WordBasedUnit, LAST_SEPARATOR_KEY, SEPARATOR_KEY,
        SPACE_KEY,
    };

    #[test]
    fn every_bundle_is_complete() {
        for bundle in CompiledData::bundles() {
            let locale = Locale::try_from_str(bundle).unwrap();
            let resources = ResourceBundle::new(&CompiledData, &locale);
            for unit in WordBasedUnit::PERIOD.iter().chain(&WordBasedUnit::DURATION) {
                assert!(resources.unit_format(*unit).is_ok(), "{bundle}: {unit:?}");
            }
            for key in [SEPARATOR_KEY, LAST_SEPARATOR_KEY, SPACE_KEY] {
                // Present in the bundle itself, not only through fallback.
                assert!(CompiledData.get(bundle, key).is_some(), "{bundle}: {key}");
            }
        }
    }

    #[test]
    fn unknown_bundles_have_no_data() {
        assert_eq!(CompiledData.get("en-GB", "year"), None);
        assert_eq!(CompiledData.get("xx", "list.space"), None);
        assert_eq!(CompiledData.get("en", "fortnight"), None);
    }
}
