use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

const DEFAULT_DIFFICULTY: &str = "Média";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid alternative letter: {0:?}")]
pub struct LetterError(pub String);

/// Answer option key. The server sends lowercase letters and echoes the
/// correct answer in uppercase, so both spellings are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Letter {
    #[serde(alias = "A")]
    A,
    #[serde(alias = "B")]
    B,
    #[serde(alias = "C")]
    C,
    #[serde(alias = "D")]
    D,
    #[serde(alias = "E")]
    E,
}

impl Letter {
    pub const ALL: [Letter; 5] = [Letter::A, Letter::B, Letter::C, Letter::D, Letter::E];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Letter::A => "a",
            Letter::B => "b",
            Letter::C => "c",
            Letter::D => "d",
            Letter::E => "e",
        }
    }

    #[must_use]
    pub fn upper(self) -> &'static str {
        match self {
            Letter::A => "A",
            Letter::B => "B",
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Letter {
    type Err = LetterError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Letter::A),
            "b" => Ok(Letter::B),
            "c" => Ok(Letter::C),
            "d" => Ok(Letter::D),
            "e" => Ok(Letter::E),
            _ => Err(LetterError(raw.to_string())),
        }
    }
}

/// Returns the text when it carries information. Empty strings and the
/// `"N/A"` placeholder used by the question bank count as absent.
#[must_use]
pub fn meaningful(value: Option<&str>) -> Option<&str> {
    value.filter(|text| {
        let text = text.trim();
        !text.is_empty() && text != "N/A"
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Option texts keyed by letter. `e` is optional: four-option questions omit it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternatives {
    #[serde(default)]
    pub a: Option<String>,
    #[serde(default)]
    pub b: Option<String>,
    #[serde(default)]
    pub c: Option<String>,
    #[serde(default)]
    pub d: Option<String>,
    #[serde(default)]
    pub e: Option<String>,
}

/// One answer option as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    pub letter: Letter,
    pub text: String,
}

impl Alternatives {
    #[must_use]
    pub fn get(&self, letter: Letter) -> Option<&str> {
        match letter {
            Letter::A => self.a.as_deref(),
            Letter::B => self.b.as_deref(),
            Letter::C => self.c.as_deref(),
            Letter::D => self.d.as_deref(),
            Letter::E => self.e.as_deref(),
        }
    }

    /// Options to render. A missing or empty `e` is dropped; a missing `a`..`d`
    /// is kept with an empty label.
    #[must_use]
    pub fn options(&self) -> Vec<AnswerOption> {
        Letter::ALL
            .into_iter()
            .filter_map(|letter| {
                let text = self.get(letter);
                if letter == Letter::E && text.is_none_or(str::is_empty) {
                    return None;
                }
                Some(AnswerOption {
                    letter,
                    text: text.unwrap_or_default().to_string(),
                })
            })
            .collect()
    }
}

/// A question as served by the question bank. Never persisted client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub enunciado: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub disciplina: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub materia: String,
    #[serde(default)]
    pub dificuldade: Option<String>,
    #[serde(default)]
    pub alternativas: Alternatives,
    #[serde(default)]
    pub dica: Option<String>,
    #[serde(default)]
    pub formula: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub resposta_correta: String,
    #[serde(default)]
    pub justificativa: Option<String>,
}

impl Question {
    #[must_use]
    pub fn difficulty_label(&self) -> &str {
        meaningful(self.dificuldade.as_deref()).unwrap_or(DEFAULT_DIFFICULTY)
    }

    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        meaningful(self.dica.as_deref())
    }

    #[must_use]
    pub fn formula(&self) -> Option<&str> {
        meaningful(self.formula.as_deref())
    }

    #[must_use]
    pub fn justification(&self) -> Option<&str> {
        meaningful(self.justificativa.as_deref())
    }

    /// Feedback rebuilt from a previously recorded answer, used when an
    /// answered question is shown again.
    #[must_use]
    pub fn feedback_for(&self, prior: &PriorAnswer) -> AnswerFeedback {
        AnswerFeedback {
            acertou: prior.acertou,
            resposta_correta: self.resposta_correta.to_uppercase(),
            justificativa: self.justification().map(str::to_string),
        }
    }
}

/// The server's record of an earlier answer (`resposta_anterior`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorAnswer {
    pub alternativa_escolhida: Letter,
    pub acertou: bool,
}

/// Correctness feedback for an answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerFeedback {
    pub acertou: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub resposta_correta: String,
    #[serde(default)]
    pub justificativa: Option<String>,
}

impl AnswerFeedback {
    /// The explanation is only shown for wrong answers.
    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        if self.acertou {
            return None;
        }
        meaningful(self.justificativa.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question_json(extra: &str) -> String {
        format!(
            r#"{{
                "id": 42,
                "enunciado": "Quanto é 2 + 2?",
                "disciplina": "Matemática",
                "materia": "Aritmética",
                "alternativas": {{"a": "3", "b": "4", "c": "5", "d": null, "e": null}},
                "resposta_correta": "b"
                {extra}
            }}"#
        )
    }

    #[test]
    fn missing_difficulty_defaults_to_media() {
        let question: Question = serde_json::from_str(&question_json("")).unwrap();
        assert_eq!(question.difficulty_label(), "Média");
        assert_eq!(question.hint(), None);
        assert_eq!(question.formula(), None);
    }

    #[test]
    fn placeholder_hint_is_suppressed() {
        let question: Question =
            serde_json::from_str(&question_json(r#", "dica": "N/A", "formula": "a² + b²""#))
                .unwrap();
        assert_eq!(question.hint(), None);
        assert_eq!(question.formula(), Some("a² + b²"));
    }

    #[test]
    fn options_drop_missing_e_but_keep_empty_d() {
        let question: Question = serde_json::from_str(&question_json("")).unwrap();
        let options = question.alternativas.options();
        let letters: Vec<_> = options.iter().map(|opt| opt.letter).collect();
        assert_eq!(letters, vec![Letter::A, Letter::B, Letter::C, Letter::D]);
        assert_eq!(options[3].text, "");
    }

    #[test]
    fn five_option_question_keeps_e() {
        let alternatives = Alternatives {
            a: Some("1".into()),
            b: Some("2".into()),
            c: Some("3".into()),
            d: Some("4".into()),
            e: Some("5".into()),
        };
        assert_eq!(alternatives.options().len(), 5);
    }

    #[test]
    fn prior_answer_accepts_lowercase_letter() {
        let prior: PriorAnswer =
            serde_json::from_str(r#"{"alternativa_escolhida": "c", "acertou": false}"#).unwrap();
        assert_eq!(prior.alternativa_escolhida, Letter::C);
    }

    #[test]
    fn feedback_for_prior_answer_uppercases_correct_letter() {
        let question: Question = serde_json::from_str(&question_json(
            r#", "justificativa": "Soma simples.""#,
        ))
        .unwrap();
        let prior = PriorAnswer {
            alternativa_escolhida: Letter::A,
            acertou: false,
        };
        let feedback = question.feedback_for(&prior);
        assert_eq!(feedback.resposta_correta, "B");
        assert_eq!(feedback.explanation(), Some("Soma simples."));
    }

    #[test]
    fn correct_answer_hides_explanation() {
        let feedback = AnswerFeedback {
            acertou: true,
            resposta_correta: "B".into(),
            justificativa: Some("Soma simples.".into()),
        };
        assert_eq!(feedback.explanation(), None);
    }

    #[test]
    fn letter_parses_case_insensitively() {
        assert_eq!("E".parse::<Letter>().unwrap(), Letter::E);
        assert!("f".parse::<Letter>().is_err());
    }
}
