#[cfg(test)]
pub mod fixtures {
    /// Three well-formed questions, the way the model is asked to answer.
    pub fn three_question_quiz() -> String {
        "Here is your quiz.\n\n\
         Q1: What pigment absorbs light in photosynthesis?\n\
         A) Hemoglobin\n\
         B) Chlorophyll\n\
         C) Melanin\n\
         D) Keratin\n\
         Correct Answer: B\n\
         Detailed Explanation: Chlorophyll absorbs red and blue light.\n\n\
         Q2: Where do the light reactions occur?\n\
         A) Thylakoid membranes\n\
         B) Stroma\n\
         C) Mitochondria\n\
         D) Nucleus\n\
         Correct Answer: A\n\
         Detailed Explanation: The thylakoid membranes hold the photosystems.\n\n\
         Q3: Which gas is released as a by-product?\n\
         A) Nitrogen\n\
         B) Carbon dioxide\n\
         C) Oxygen\n\
         D) Methane\n\
         Correct Answer: C\n\
         Detailed Explanation: Splitting water releases oxygen.\n"
            .to_string()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::test_helpers::*;
    use crate::services::quiz_parser;

    #[test]
    fn test_fixture_parses_to_three_questions() {
        let questions = quiz_parser::parse_default(&three_question_quiz());

        assert_eq!(questions.len(), 3);
        assert_eq!(questions[1].options[0].line, "A) Thylakoid membranes");
        assert!(questions.iter().all(|q| quiz_parser::lint(q).is_empty()));
    }

    #[test]
    fn test_assert_error_status_accepts_4xx() {
        assert_error_status(actix_web::http::StatusCode::BAD_REQUEST);
    }
}
