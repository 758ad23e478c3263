//! Localization: the UA/PL string catalog, summary-sentence templating and
//! lead-message composition.
//!
//! The numeric core never produces text. Everything user-facing is rendered
//! here from structured deltas, so the model stays language-agnostic and
//! independently testable.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::types::{CalculatorInput, Duration, ForecastResult, Goal, GoalOutcome};
use crate::validation::{ContactError, FieldError};

/// Supported interface languages. The site serves a Ukrainian trainer
/// working in Poland, so Polish is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ua,
    #[default]
    Pl,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ua => "ua",
            Language::Pl => "pl",
        }
    }

    /// The other supported language, used by the header toggle
    pub fn other(&self) -> Language {
        match self {
            Language::Ua => Language::Pl,
            Language::Pl => Language::Ua,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported language code: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ua" => Ok(Language::Ua),
            "pl" => Ok(Language::Pl),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

// ============================================================================
// Language selection persistence
// ============================================================================

/// External storage collaborator for the language choice (the browser's
/// local storage in the reference frontend).
pub trait PreferenceStore {
    fn load(&self) -> Option<Language>;
    fn save(&mut self, language: Language);
}

/// In-memory store, used in tests and headless contexts
#[derive(Debug, Default)]
pub struct MemoryStore(Option<Language>);

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<Language> {
        self.0
    }

    fn save(&mut self, language: Language) {
        self.0 = Some(language);
    }
}

/// Holds the selected language and persists every change.
///
/// A fresh store starts at the default language, which is written back so
/// the next session sees the same choice.
#[derive(Debug)]
pub struct LanguageProvider<S> {
    store: S,
    current: Language,
}

impl<S: PreferenceStore> LanguageProvider<S> {
    pub fn new(mut store: S) -> Self {
        let current = store.load().unwrap_or_default();
        store.save(current);
        Self { store, current }
    }

    pub fn current(&self) -> Language {
        self.current
    }

    pub fn strings(&self) -> &'static Translations {
        Translations::get(self.current)
    }

    pub fn select(&mut self, language: Language) {
        self.current = language;
        self.store.save(language);
    }

    pub fn toggle(&mut self) {
        self.select(self.current.other());
    }
}

// ============================================================================
// String tables
// ============================================================================

/// Nested string table for one language. Serialized shape matches what the
/// frontend expects (camelCase keys).
#[derive(Debug, Clone, Serialize)]
pub struct Translations {
    pub calculator: CalculatorStrings,
    pub contact: ContactStrings,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub step1: &'static str,
    pub step2: &'static str,
    pub step3: &'static str,
    pub goals: GoalStrings,
    pub gender: GenderStrings,
    pub age: &'static str,
    pub height: &'static str,
    pub weight: &'static str,
    pub activity: ActivityStrings,
    pub duration: DurationStrings,
    pub calculate: &'static str,
    pub results: ResultStrings,
    pub validation: ValidationStrings,
    pub disclaimer: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalStrings {
    pub weight_loss: &'static str,
    pub muscle_gain: &'static str,
    pub complex: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenderStrings {
    pub label: &'static str,
    pub male: &'static str,
    pub female: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityStrings {
    pub label: &'static str,
    pub beginner: &'static str,
    pub moderate: &'static str,
    pub advanced: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DurationStrings {
    pub month1: &'static str,
    pub month3: &'static str,
    pub month6: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultStrings {
    pub now: &'static str,
    pub after: &'static str,
    pub weight: &'static str,
    pub fat_percent: &'static str,
    pub muscle_mass: &'static str,
    pub change: &'static str,
    pub cta: &'static str,
    pub cta_subtitle: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationStrings {
    pub age_range: &'static str,
    pub height_range: &'static str,
    pub weight_range: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub form: ContactFormStrings,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormStrings {
    pub name: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub message: &'static str,
    pub message_placeholder: &'static str,
    pub submit: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub phone_error: &'static str,
    pub email_error: &'static str,
}

static UA: Translations = Translations {
    calculator: CalculatorStrings {
        title: "Розрахуйте ваш потенційний результат",
        subtitle: "Вкажіть ваші дані та цілі, а система розрахує, яких змін можна досягти під моїм керівництвом",
        step1: "Крок 1: Оберіть ціль",
        step2: "Крок 2: Ваші дані",
        step3: "Крок 3: Термін",
        goals: GoalStrings {
            weight_loss: "Схуднення",
            muscle_gain: "Набір маси",
            complex: "Комплекс",
        },
        gender: GenderStrings {
            label: "Стать",
            male: "Чоловік",
            female: "Жінка",
        },
        age: "Вік (років)",
        height: "Зріст (см)",
        weight: "Поточна вага (кг)",
        activity: ActivityStrings {
            label: "Рівень активності",
            beginner: "Початківець (мало рухаюсь)",
            moderate: "Середній (1-2 рази на тиждень)",
            advanced: "Досвідчений (регулярні тренування)",
        },
        duration: DurationStrings {
            month1: "1 місяць",
            month3: "3 місяці",
            month6: "6 місяців",
        },
        calculate: "Розрахувати мій прогноз",
        results: ResultStrings {
            now: "Зараз",
            after: "Через",
            weight: "Вага",
            fat_percent: "% жиру",
            muscle_mass: "М'язова маса",
            change: "зміна",
            cta: "Хочу такий результат!",
            cta_subtitle: "Записатися на безкоштовну консультацію",
        },
        validation: ValidationStrings {
            age_range: "Вік має бути від 16 до 70 років",
            height_range: "Зріст має бути від 140 до 220 см",
            weight_range: "Вага має бути від 40 до 200 кг",
        },
        disclaimer: "* Це лише приблизні результати розрахунків. Для отримання точних даних та індивідуальної програми запишіться на безкоштовну консультацію.",
    },
    contact: ContactStrings {
        title: "Зв'язатись зі мною",
        subtitle: "Готовий почати свій шлях до кращої форми? Залиш заявку і я зв'яжусь з тобою!",
        form: ContactFormStrings {
            name: "Ім'я",
            phone: "Телефон",
            email: "Email",
            message: "Повідомлення",
            message_placeholder: "Розкажіть про ваші цілі...",
            submit: "Надіслати заявку",
            success: "Дякую! Я зв'яжусь з вами найближчим часом.",
            error: "Щось пішло не так. Спробуйте ще раз.",
            phone_error: "Введіть коректний номер телефону (тільки цифри)",
            email_error: "Введіть коректний email",
        },
    },
};

static PL: Translations = Translations {
    calculator: CalculatorStrings {
        title: "Oblicz swój potencjalny wynik",
        subtitle: "Podaj swoje dane i cele, a system obliczy, jakie zmiany możesz osiągnąć pod moim kierownictwem",
        step1: "Krok 1: Wybierz cel",
        step2: "Krok 2: Twoje dane",
        step3: "Krok 3: Okres",
        goals: GoalStrings {
            weight_loss: "Odchudzanie",
            muscle_gain: "Budowanie masy",
            complex: "Kompleks",
        },
        gender: GenderStrings {
            label: "Płeć",
            male: "Mężczyzna",
            female: "Kobieta",
        },
        age: "Wiek (lat)",
        height: "Wzrost (cm)",
        weight: "Aktualna waga (kg)",
        activity: ActivityStrings {
            label: "Poziom aktywności",
            beginner: "Początkujący (mało się ruszam)",
            moderate: "Średni (1-2 razy w tygodniu)",
            advanced: "Zaawansowany (regularne treningi)",
        },
        duration: DurationStrings {
            month1: "1 miesiąc",
            month3: "3 miesiące",
            month6: "6 miesięcy",
        },
        calculate: "Oblicz moją prognozę",
        results: ResultStrings {
            now: "Teraz",
            after: "Za",
            weight: "Waga",
            fat_percent: "% tłuszczu",
            muscle_mass: "Masa mięśniowa",
            change: "zmiana",
            cta: "Chcę taki wynik!",
            cta_subtitle: "Zapisz się na bezpłatną konsultację",
        },
        validation: ValidationStrings {
            age_range: "Wiek musi wynosić od 16 do 70 lat",
            height_range: "Wzrost musi wynosić od 140 do 220 cm",
            weight_range: "Waga musi wynosić od 40 do 200 kg",
        },
        disclaimer: "* To tylko przybliżone wyniki obliczeń. Aby uzyskać dokładne dane i indywidualny program, zapisz się na bezpłatną konsultację.",
    },
    contact: ContactStrings {
        title: "Skontaktuj się ze mną",
        subtitle: "Gotowy rozpocząć drogę do lepszej formy? Zostaw zgłoszenie, a skontaktuję się z tobą!",
        form: ContactFormStrings {
            name: "Imię",
            phone: "Telefon",
            email: "Email",
            message: "Wiadomość",
            message_placeholder: "Opowiedz o swoich celach...",
            submit: "Wyślij zgłoszenie",
            success: "Dziękuję! Skontaktuję się z tobą wkrótce.",
            error: "Coś poszło nie tak. Spróbuj ponownie.",
            phone_error: "Wprowadź poprawny numer telefonu (tylko cyfry)",
            email_error: "Wprowadź poprawny adres email",
        },
    },
};

impl Translations {
    /// The full string table for a language
    pub fn get(language: Language) -> &'static Translations {
        match language {
            Language::Ua => &UA,
            Language::Pl => &PL,
        }
    }
}

/// Localized message for a calculator field error
pub fn field_error_message(language: Language, error: FieldError) -> &'static str {
    let strings = &Translations::get(language).calculator.validation;
    match error {
        FieldError::AgeRange => strings.age_range,
        FieldError::HeightRange => strings.height_range,
        FieldError::WeightRange => strings.weight_range,
    }
}

/// Localized message for a contact-form field error
pub fn contact_error_message(language: Language, error: ContactError) -> &'static str {
    let form = &Translations::get(language).contact.form;
    match error {
        ContactError::PhoneFormat => form.phone_error,
        ContactError::EmailFormat => form.email_error,
    }
}

/// Localized goal label
pub fn goal_label(language: Language, goal: Goal) -> &'static str {
    let goals = &Translations::get(language).calculator.goals;
    match goal {
        Goal::WeightLoss => goals.weight_loss,
        Goal::MuscleGain => goals.muscle_gain,
        Goal::Complex => goals.complex,
    }
}

/// Localized duration button label ("3 місяці" / "3 miesiące")
pub fn duration_label(language: Language, duration: Duration) -> &'static str {
    let labels = &Translations::get(language).calculator.duration;
    match duration {
        Duration::OneMonth => labels.month1,
        Duration::ThreeMonths => labels.month3,
        Duration::SixMonths => labels.month6,
    }
}

/// The month word as it appears inside the summary sentence ("За 3 місяці",
/// "W ciągu 3 miesięcy"). UA and PL decline the noun differently per count.
fn month_word(language: Language, duration: Duration) -> &'static str {
    match (language, duration) {
        (Language::Ua, Duration::OneMonth) => "місяць",
        (Language::Ua, Duration::ThreeMonths) => "місяці",
        (Language::Ua, Duration::SixMonths) => "місяців",
        (Language::Pl, Duration::OneMonth) => "miesiąca",
        (Language::Pl, _) => "miesięcy",
    }
}

/// Render the localized summary sentence from the computed deltas.
///
/// One template per goal per language; figures come from the projection
/// output, never from the raw rates.
pub fn render_summary(language: Language, duration: Duration, outcome: &GoalOutcome) -> String {
    let months = duration.months();
    let unit = month_word(language, duration);

    match (language, outcome) {
        (Language::Ua, GoalOutcome::WeightLoss { lost_kg }) => format!(
            "За {months} {unit} під моїм наставництвом ви можете скинути ~{lost_kg:.1} кг жиру \
             та зберегти м'язову масу. Ваше тіло стане витривалішим і підтягнутішим."
        ),
        (Language::Ua, GoalOutcome::MuscleGain { gained_kg }) => format!(
            "За {months} {unit} під моїм наставництвом ви можете набрати ~{gained_kg:.1} кг \
             м'язової маси. Ваше тіло стане сильнішим та рельєфнішим."
        ),
        (
            Language::Ua,
            GoalOutcome::Complex {
                fat_lost_kg,
                muscle_gained_kg,
            },
        ) => format!(
            "За {months} {unit} під моїм наставництвом ви можете скинути ~{fat_lost_kg:.1} кг жиру \
             та набрати ~{muscle_gained_kg:.1} кг м'язової маси. Ідеальна рекомпозиція тіла!"
        ),
        (Language::Pl, GoalOutcome::WeightLoss { lost_kg }) => format!(
            "W ciągu {months} {unit} pod moim kierownictwem możesz schudnąć ~{lost_kg:.1} kg \
             tłuszczu i zachować masę mięśniową. Twoje ciało stanie się bardziej wytrzymałe i jędrne."
        ),
        (Language::Pl, GoalOutcome::MuscleGain { gained_kg }) => format!(
            "W ciągu {months} {unit} pod moim kierownictwem możesz zbudować ~{gained_kg:.1} kg \
             masy mięśniowej. Twoje ciało stanie się silniejsze i bardziej wyrzeźbione."
        ),
        (
            Language::Pl,
            GoalOutcome::Complex {
                fat_lost_kg,
                muscle_gained_kg,
            },
        ) => format!(
            "W ciągu {months} {unit} pod moim kierownictwem możesz schudnąć ~{fat_lost_kg:.1} kg \
             tłuszczu i zbudować ~{muscle_gained_kg:.1} kg masy mięśniowej. Idealna rekompozycja ciała!"
        ),
    }
}

/// Default lead name used when the request comes from the calculator CTA
/// rather than the contact form
pub fn calculator_lead_name(language: Language) -> &'static str {
    match language {
        Language::Ua => "Заявка з калькулятора",
        Language::Pl => "Zgłoszenie z kalkulatora",
    }
}

/// Compose the free-text lead message sent to the backend after a forecast:
/// goal, current and target weight, duration and the summary sentence.
pub fn compose_lead_message(
    language: Language,
    input: &CalculatorInput,
    result: &ForecastResult,
) -> String {
    let goal = goal_label(language, input.goal);
    let summary = render_summary(language, input.duration, &result.outcome);
    let months = input.duration.months();
    let current = input.weight_kg;
    let target = result.forecast.weight_kg;

    match language {
        Language::Ua => format!(
            "🎯 Ціль: {goal}\n📊 Поточна вага: {current} кг\n🎯 Цільова вага: {target} кг\n\
             ⏱ Термін: {months} міс.\n\n{summary}"
        ),
        Language::Pl => format!(
            "🎯 Cel: {goal}\n📊 Aktualna waga: {current} kg\n🎯 Docelowa waga: {target} kg\n\
             ⏱ Okres: {months} mies.\n\n{summary}"
        ),
    }
}
