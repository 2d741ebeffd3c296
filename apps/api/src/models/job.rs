use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Publication state of a job. New postings go live immediately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    #[default]
    Live,
    Pending,
    Draft,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Live => "Live",
            JobStatus::Pending => "Pending",
            JobStatus::Draft => "Draft",
        }
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Live" => Ok(JobStatus::Live),
            "Pending" => Ok(JobStatus::Pending),
            "Draft" => Ok(JobStatus::Draft),
            other => Err(format!("unknown job status '{other}'")),
        }
    }
}

/// Structured fields the model pulled out of a description.
/// Scalars are `None` rather than empty; `skills` is always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedJob {
    pub job_title: Option<String>,
    pub experience: Option<String>,
    pub position: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
}

/// A job ready to be inserted. Id and timestamps are assigned on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJobRecord {
    pub company_id: Uuid,
    pub raw_description: String,
    pub extracted_data: ExtractedJob,
    pub status: JobStatus,
    pub metadata: Value,
}

/// A persisted job posting as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: Uuid,
    pub company_id: Uuid,
    pub raw_description: String,
    pub extracted_data: ExtractedJob,
    pub status: JobStatus,
    pub metadata: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Flat row shape of the `jobs` table.
#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub company_id: Uuid,
    pub raw_description: String,
    pub job_title: Option<String>,
    pub experience: Option<String>,
    pub position: Option<String>,
    pub skills: Vec<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub status: String,
    pub metadata: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<JobRow> for JobRecord {
    type Error = String;

    fn try_from(row: JobRow) -> Result<Self, Self::Error> {
        Ok(JobRecord {
            id: row.id,
            company_id: row.company_id,
            raw_description: row.raw_description,
            extracted_data: ExtractedJob {
                job_title: row.job_title,
                experience: row.experience,
                position: row.position,
                skills: row.skills,
                location: row.location,
                job_type: row.job_type,
            },
            status: row.status.parse()?,
            metadata: row.metadata,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults_to_live() {
        assert_eq!(JobStatus::default(), JobStatus::Live);
    }

    #[test]
    fn test_status_round_trips_through_text() {
        for status in [JobStatus::Live, JobStatus::Pending, JobStatus::Draft] {
            assert_eq!(status.as_str().parse::<JobStatus>().unwrap(), status);
        }
        assert!("live".parse::<JobStatus>().is_err());
    }

    #[test]
    fn test_extracted_job_serializes_camel_case_with_nulls() {
        let job = ExtractedJob {
            job_title: Some("Senior React Developer".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["jobTitle"], "Senior React Developer");
        assert!(value["jobType"].is_null());
        assert_eq!(value["skills"], serde_json::json!([]));
    }

    #[test]
    fn test_row_with_unknown_status_is_rejected() {
        let now = Utc::now();
        let row = JobRow {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            raw_description: "desc".into(),
            job_title: None,
            experience: None,
            position: None,
            skills: vec![],
            location: None,
            job_type: None,
            status: "Archived".into(),
            metadata: serde_json::json!({}),
            created_at: now,
            updated_at: now,
        };
        assert!(JobRecord::try_from(row).is_err());
    }
}
