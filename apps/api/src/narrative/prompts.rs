// Prompt constants for the narrative endpoint.

/// System prompt: career coach persona, JSON-only output.
pub const NARRATIVE_SYSTEM: &str = "You are an experienced technical recruiter and career coach. \
    You compare a candidate's resume with a job description and give honest, specific feedback. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Narrative prompt template. Replace `{job_description}` and `{resume}` before sending.
pub const NARRATIVE_PROMPT_TEMPLATE: &str = r#"Compare the resume below with the job description.

Return a JSON object with this shape:
{
  "ideal_candidate": {
    "summary": "2-3 sentences describing the ideal hire for this role",
    "must_have_skills": ["..."],
    "nice_to_have_skills": ["..."]
  },
  "resume_feedback": {
    "strengths": ["what the resume already does well for this role"],
    "gaps": ["requirements the resume does not demonstrate"]
  },
  "actionable_suggestions": [
    {"section": "experience", "suggestion": "...", "example_bullet": "..."}
  ]
}

Base every statement on the two texts. Do not invent employers, dates or metrics.

JOB DESCRIPTION:
{job_description}

RESUME:
{resume}"#;

const JOB_DESCRIPTION_SLOT: &str = "{job_description}";
const RESUME_SLOT: &str = "{resume}";

/// Fills the template in a single pass, so placeholder text inside either
/// document is copied through literally.
pub fn build_narrative_prompt(resume: &str, job_description: &str) -> String {
    let mut prompt = String::with_capacity(
        NARRATIVE_PROMPT_TEMPLATE.len() + resume.len() + job_description.len(),
    );
    let mut rest = NARRATIVE_PROMPT_TEMPLATE;

    while let Some(open) = rest.find('{') {
        let (head, tail) = rest.split_at(open);
        prompt.push_str(head);
        if let Some(after) = tail.strip_prefix(JOB_DESCRIPTION_SLOT) {
            prompt.push_str(job_description);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(RESUME_SLOT) {
            prompt.push_str(resume);
            rest = after;
        } else {
            // A literal brace of the JSON example.
            prompt.push('{');
            rest = &tail[1..];
        }
    }
    prompt.push_str(rest);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_both_texts() {
        let prompt = build_narrative_prompt("RESUME BODY", "JD BODY");
        assert!(prompt.contains("JOB DESCRIPTION:\nJD BODY"));
        assert!(prompt.contains("RESUME:\nRESUME BODY"));
        assert!(!prompt.contains("{resume}"));
        assert!(!prompt.contains("{job_description}"));
    }

    #[test]
    fn test_placeholders_inside_documents_are_not_expanded() {
        let prompt = build_narrative_prompt("RESUME BODY", "Please paste {resume} here");
        assert_eq!(prompt.matches("RESUME BODY").count(), 1);
        assert!(prompt.contains("JOB DESCRIPTION:\nPlease paste {resume} here"));

        let prompt = build_narrative_prompt("see {job_description}", "JD BODY");
        assert_eq!(prompt.matches("JD BODY").count(), 1);
        assert!(prompt.contains("RESUME:\nsee {job_description}"));
    }

    #[test]
    fn test_json_example_braces_are_kept() {
        let prompt = build_narrative_prompt("r", "j");
        assert!(prompt.contains("\"ideal_candidate\": {"));
        assert_eq!(
            prompt.matches('{').count(),
            NARRATIVE_PROMPT_TEMPLATE.matches('{').count() - 2
        );
    }

    #[test]
    fn test_prompt_names_the_expected_sections() {
        for key in ["ideal_candidate", "resume_feedback", "actionable_suggestions"] {
            assert!(NARRATIVE_PROMPT_TEMPLATE.contains(key));
        }
    }
}
