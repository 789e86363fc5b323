use askama::Template;

use crate::entities::ExperienceLevel;

#[derive(Template)]
#[template(
    source = r#"
<p>Your verification OTP is: <strong>{{ code }}</strong></p>
<p>This OTP will expire in {{ ttl_minutes }} minutes.</p>
"#,
    ext = "html"
)]
pub struct VerificationEmail<'a> {
    pub code: &'a str,
    pub ttl_minutes: i64,
}

impl VerificationEmail<'_> {
    pub const SUBJECT: &'static str = "Verify your email";
}

/// Notification sent to each candidate of a new posting.
#[derive(Template)]
#[template(
    source = r#"
<h1>New Job Opportunity</h1>
<p>Dear Candidate,</p>
<p>We have a new job opportunity that might interest you:</p>
<h2>{{ job_title }}</h2>
<p><strong>Company:</strong> {{ company_name }}</p>
<p><strong>Experience Level:</strong> {{ experience_level }}</p>
<p><strong>Job Description:</strong></p>
<p>{{ job_description }}</p>
<p><strong>Application Deadline:</strong> {{ end_date }}</p>
<p>If you're interested, please apply through our platform.</p>
<p>Best regards,<br>{{ sender_name }}<br>{{ company_name }}</p>
"#,
    ext = "html"
)]
pub struct JobOpportunityEmail<'a> {
    pub job_title: &'a str,
    pub job_description: &'a str,
    pub experience_level: ExperienceLevel,
    pub end_date: &'a str,
    pub company_name: &'a str,
    pub sender_name: &'a str,
}

impl JobOpportunityEmail<'_> {
    pub fn subject(&self) -> String {
        format!("New Job Opportunity from {}", self.company_name)
    }
}
