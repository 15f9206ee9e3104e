use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::survey::SurveyModel;

/// One account's vote on one survey, as requested by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveSurveyResultParams {
    pub survey_id: String,
    pub account_id: String,
    pub answer: String,
    pub date: DateTime<Utc>,
}

/// A stored vote. `(survey_id, account_id)` is unique in the store.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyVote {
    pub survey_id: String,
    pub account_id: String,
    pub answer: String,
    pub date: DateTime<Utc>,
}

impl From<&SaveSurveyResultParams> for SurveyVote {
    fn from(params: &SaveSurveyResultParams) -> Self {
        Self {
            survey_id: params.survey_id.clone(),
            account_id: params.account_id.clone(),
            answer: params.answer.clone(),
            date: params.date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyResultAnswer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub answer: String,
    pub count: u64,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResultModel {
    pub survey_id: String,
    pub question: String,
    pub answers: Vec<SurveyResultAnswer>,
    pub date: DateTime<Utc>,
}

impl SurveyResultModel {
    /// Builds the per-answer breakdown of `survey` from its current votes.
    ///
    /// Every allowed answer is listed in the survey's own order, zero-vote
    /// answers included. The total is the number of votes cast on the
    /// survey, so a stored answer the survey no longer offers still counts
    /// toward it without getting an entry of its own.
    pub fn tally(survey: &SurveyModel, votes: &[SurveyVote]) -> Self {
        let mut counts: HashMap<&str, u64> = HashMap::new();
        let mut total: u64 = 0;

        for vote in votes.iter().filter(|v| v.survey_id == survey.id) {
            *counts.entry(vote.answer.as_str()).or_default() += 1;
            total += 1;
        }

        let answers = survey
            .answers
            .iter()
            .map(|allowed| {
                let count = counts.get(allowed.answer.as_str()).copied().unwrap_or(0);
                SurveyResultAnswer {
                    image: allowed.image.clone(),
                    answer: allowed.answer.clone(),
                    count,
                    percent: percent_of(count, total),
                }
            })
            .collect();

        Self {
            survey_id: survey.id.clone(),
            question: survey.question.clone(),
            answers,
            date: survey.date,
        }
    }

    pub fn total_votes(&self) -> u64 {
        self.answers.iter().map(|a| a.count).sum()
    }

    pub fn answer(&self, label: &str) -> Option<&SurveyResultAnswer> {
        self.answers.iter().find(|a| a.answer == label)
    }
}

fn percent_of(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::survey::SurveyAnswer;
    use chrono::TimeZone;

    fn survey() -> SurveyModel {
        SurveyModel {
            id: "S1".to_string(),
            question: "Do you like Rust?".to_string(),
            answers: vec![
                SurveyAnswer {
                    image: Some("http://image-name.com".to_string()),
                    answer: "yes".to_string(),
                },
                SurveyAnswer {
                    image: None,
                    answer: "no".to_string(),
                },
            ],
            date: Utc.with_ymd_and_hms(2030, 12, 31, 0, 0, 0).unwrap(),
        }
    }

    fn vote(account: &str, answer: &str) -> SurveyVote {
        SurveyVote {
            survey_id: "S1".to_string(),
            account_id: account.to_string(),
            answer: answer.to_string(),
            date: Utc::now(),
        }
    }

    #[test]
    fn lists_zero_vote_answers_in_survey_order() {
        let result = SurveyResultModel::tally(&survey(), &[vote("acc1", "no")]);

        let labels: Vec<&str> = result.answers.iter().map(|a| a.answer.as_str()).collect();
        assert_eq!(labels, vec!["yes", "no"]);
        assert_eq!(result.answers[0].count, 0);
        assert_eq!(result.answers[0].percent, 0.0);
        assert_eq!(result.answers[0].image.as_deref(), Some("http://image-name.com"));
        assert_eq!(result.answers[1].count, 1);
        assert_eq!(result.answers[1].percent, 100.0);
    }

    #[test]
    fn no_votes_yields_all_zero_breakdown() {
        let result = SurveyResultModel::tally(&survey(), &[]);

        assert_eq!(result.survey_id, "S1");
        assert_eq!(result.question, "Do you like Rust?");
        assert_eq!(result.total_votes(), 0);
        assert!(result.answers.iter().all(|a| a.percent == 0.0));
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let mut s = survey();
        s.answers.push(SurveyAnswer {
            image: None,
            answer: "maybe".to_string(),
        });
        let votes = vec![
            vote("a", "yes"),
            vote("b", "no"),
            vote("c", "maybe"),
            vote("d", "yes"),
            vote("e", "yes"),
            vote("f", "maybe"),
            vote("g", "no"),
        ];

        let result = SurveyResultModel::tally(&s, &votes);

        let sum: f64 = result.answers.iter().map(|a| a.percent).sum();
        assert!((sum - 100.0).abs() < 1e-9, "sum was {sum}");
        assert_eq!(result.answer("yes").unwrap().count, 3);
    }

    #[test]
    fn ignores_votes_of_other_surveys() {
        let mut foreign = vote("acc9", "yes");
        foreign.survey_id = "S2".to_string();

        let result = SurveyResultModel::tally(&survey(), &[vote("acc1", "yes"), foreign]);

        assert_eq!(result.total_votes(), 1);
        assert_eq!(result.answer("yes").unwrap().percent, 100.0);
    }

    #[test]
    fn unknown_answers_count_toward_total_only() {
        let result = SurveyResultModel::tally(&survey(), &[vote("a", "yes"), vote("b", "retired")]);

        assert_eq!(result.answers.len(), 2);
        assert_eq!(result.answer("yes").unwrap().percent, 50.0);
        assert_eq!(result.answer("no").unwrap().percent, 0.0);
    }
}
