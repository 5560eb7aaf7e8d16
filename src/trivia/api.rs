use crate::model::{ANSWERS_PER_QUESTION, Question};
use crate::trivia::FetchError;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;

/// Cuerpo que devuelve `api.php`.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub response_code: u32,
    pub results: Vec<ApiQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct ApiQuestion {
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

/// Une incorrectas + correcta y baraja (Fisher-Yates) una sola vez.
pub fn build_answers<R: Rng + ?Sized>(
    incorrect: Vec<String>,
    correct: &str,
    rng: &mut R,
) -> Vec<String> {
    let mut answers = incorrect;
    answers.push(correct.to_string());
    answers.shuffle(rng);
    answers
}

pub fn normalize_question<R: Rng + ?Sized>(
    index: usize,
    raw: ApiQuestion,
    rng: &mut R,
) -> Result<Question, FetchError> {
    if raw.incorrect_answers.len() != ANSWERS_PER_QUESTION - 1
        || raw.incorrect_answers.contains(&raw.correct_answer)
    {
        return Err(FetchError::InvalidQuestion(index));
    }

    let answers = build_answers(raw.incorrect_answers, &raw.correct_answer, rng);
    Ok(Question {
        text: raw.question,
        answers,
        correct: raw.correct_answer,
    })
}

/// Valida la respuesta completa y la convierte al formato interno.
/// El lote debe traer exactamente `expected` preguntas.
pub fn normalize_response<R: Rng + ?Sized>(
    response: ApiResponse,
    expected: usize,
    rng: &mut R,
) -> Result<Vec<Question>, FetchError> {
    if response.response_code != 0 {
        return Err(FetchError::Api(response.response_code));
    }
    if response.results.is_empty() {
        return Err(FetchError::Empty);
    }
    if response.results.len() != expected {
        return Err(FetchError::WrongCount {
            expected,
            got: response.results.len(),
        });
    }

    response
        .results
        .into_iter()
        .enumerate()
        .map(|(i, raw)| normalize_question(i, raw, rng))
        .collect()
}

pub fn parse_body<R: Rng + ?Sized>(
    body: &str,
    expected: usize,
    rng: &mut R,
) -> Result<Vec<Question>, FetchError> {
    let response: ApiResponse =
        serde_json::from_str(body).map_err(|err| FetchError::Malformed(err.to_string()))?;
    normalize_response(response, expected, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const BODY: &str = r#"{
        "response_code": 0,
        "results": [
            {
                "type": "multiple",
                "difficulty": "easy",
                "category": "General Knowledge",
                "question": "What is the capital of &quot;France&quot;?",
                "correct_answer": "Paris",
                "incorrect_answers": ["Lyon", "Nice", "Lille"]
            },
            {
                "type": "multiple",
                "difficulty": "easy",
                "category": "General Knowledge",
                "question": "2 + 2?",
                "correct_answer": "4",
                "incorrect_answers": ["3", "5", "22"]
            }
        ]
    }"#;

    #[test]
    fn parses_and_normalizes_a_full_batch() {
        let mut rng = StdRng::seed_from_u64(7);
        let questions = parse_body(BODY, 2, &mut rng).unwrap();

        assert_eq!(questions.len(), 2);
        for q in &questions {
            assert_eq!(q.answers.len(), 4);
            assert_eq!(q.answers.iter().filter(|a| **a == q.correct).count(), 1);
            assert!(q.is_well_formed());
        }
        assert_eq!(questions[0].correct, "Paris");
        assert_eq!(questions[0].text, "What is the capital of &quot;France&quot;?");
    }

    #[test]
    fn shuffle_puts_correct_answer_in_every_slot_evenly() {
        let mut rng = StdRng::seed_from_u64(42);
        let trials = 20_000;
        let mut hits = [0usize; 4];

        for _ in 0..trials {
            let answers = build_answers(
                vec!["a".into(), "b".into(), "c".into()],
                "right",
                &mut rng,
            );
            let pos = answers.iter().position(|a| a == "right").unwrap();
            hits[pos] += 1;
        }

        let expected = trials as f64 / 4.0;
        for count in hits {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(deviation < 0.05, "slot counts too uneven: {hits:?}");
        }
    }

    #[test]
    fn non_zero_response_code_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = parse_body(r#"{"response_code": 1, "results": []}"#, 6, &mut rng).unwrap_err();
        assert!(matches!(err, FetchError::Api(1)));
    }

    #[test]
    fn empty_and_malformed_bodies_are_errors() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            parse_body(r#"{"response_code": 0, "results": []}"#, 6, &mut rng),
            Err(FetchError::Empty)
        ));
        assert!(matches!(
            parse_body(r#"{"items": []}"#, 6, &mut rng),
            Err(FetchError::Malformed(_))
        ));
        assert!(matches!(parse_body("<html>", 6, &mut rng), Err(FetchError::Malformed(_))));
    }

    #[test]
    fn wrong_incorrect_count_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let body = r#"{"response_code": 0, "results": [
            {"question": "q", "correct_answer": "x", "incorrect_answers": ["y"]}
        ]}"#;
        assert!(matches!(
            parse_body(body, 1, &mut rng),
            Err(FetchError::InvalidQuestion(0))
        ));
    }

    #[test]
    fn batch_of_wrong_size_is_rejected() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            parse_body(BODY, 6, &mut rng),
            Err(FetchError::WrongCount {
                expected: 6,
                got: 2
            })
        );

        let one = r#"{"response_code": 0, "results": [
            {"question": "q", "correct_answer": "x", "incorrect_answers": ["a", "b", "c"]}
        ]}"#;
        assert_eq!(
            parse_body(one, 6, &mut rng),
            Err(FetchError::WrongCount {
                expected: 6,
                got: 1
            })
        );
    }

    #[test]
    fn correct_answer_listed_as_incorrect_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let body = r#"{"response_code": 0, "results": [
            {"question": "q", "correct_answer": "x", "incorrect_answers": ["a", "x", "c"]}
        ]}"#;
        assert_eq!(
            parse_body(body, 1, &mut rng),
            Err(FetchError::InvalidQuestion(0))
        );
    }
}
