//! Default prompt templates and method catalogues.
//!
//! Templates use `{name}` placeholders rendered by `domain::template::render`.
//! Users may override any of them per course; see `CourseRecord::prompt_overrides`.

use crate::domain::Section;

/// Instructional methods offered on the Course Details page.
pub const INSTRUCTION_METHODS: &[&str] = &[
    "Brainstorming",
    "Case studies",
    "Concept formation",
    "Debates",
    "Demonstrations / Modelling",
    "Didactic questions",
    "Discussions",
    "Drill and Practice",
    "Experiments",
    "Explicit teaching (Lecture) & Homework",
    "Field trips",
    "Games",
    "Independent reading",
    "Interactive presentation",
    "Peer teaching / Peer practice",
    "Problem solving",
    "Reflection",
    "Role-play",
    "Simulations",
];

/// Assessment methods offered on the Course Details page.
pub const ASSESSMENT_METHODS: &[&str] = &[
    "Written Exam",
    "Online Test",
    "Project",
    "Assignments",
    "Oral Interview",
    "Demonstration",
    "Practical Exam",
    "Role Play",
    "Oral Questioning",
    "Others: Case Studies",
    "Others: Reflection",
];

pub const ABOUT_COURSE: &str = "\
You are an expert course description writer for professional training and continuing \
education programmes. Write an \"About the Course\" section for the following course.

Course Title: {course_title}

Course Topics:
{course_topics}

Guidelines:
- Write in second person (\"you\") or third person (\"learners\", \"participants\")
- Give a clear overview of what the course covers and the practical skills gained
- Explain industry relevance and career impact
- The target learner level is beginner to intermediate
- Write exactly ONE cohesive paragraph of 80-120 words
- Do NOT use bullet points, headings or markdown formatting
- The entire response must NOT exceed 2000 characters

Respond with ONLY the paragraph text, nothing else.";

pub const WHAT_YOULL_LEARN: &str = "\
You are an expert course description writer for professional training and continuing \
education programmes. Write a \"What You'll Learn\" section for the following course.

Course Title: {course_title}

Course Topics:
{course_topics}

Guidelines:
- Write one bullet point per major topic or learning outcome, 3-5 bullets in total
- Start each bullet with \"Participants will\" or \"Learners will\"
- Each bullet is a single sentence of 40-60 words using action verbs such as apply, \
analyse, evaluate, design, implement
- Describe practical, real-world application of the skills
- Start each bullet with the character \u{2022} and separate bullets with a blank line
- Do NOT use markdown formatting, numbering or headings
- The entire response must NOT exceed 2000 characters

Respond with ONLY the bullet points, nothing else.";

pub const BACKGROUND_PART_A: &str = "\
You are an expert course description writer for professional training and continuing \
education programmes. Write a \"Background Part A\" section covering the targeted \
sector(s), the target audience and job roles, and the need for the training.

Course Title: {course_title}

Course Topics:
{course_topics}

Guidelines:
- Identify the industry sectors the course targets and the pressures they face
- Identify the job roles that benefit and why a skills gap exists
- Write 2-3 cohesive paragraphs totalling 100-200 words in a factual tone
- Do NOT use bullet points, headings or markdown formatting

Respond with ONLY the paragraph text, nothing else.";

pub const BACKGROUND_PART_B: &str = "\
You are an expert course description writer for professional training and continuing \
education programmes. Write a \"Background Part B\" section covering the performance \
gaps the course addresses, how those gaps were identified, and how learners benefit.

Course Title: {course_title}

Course Topics:
{course_topics}

Guidelines:
- First paragraph: the observable performance gaps related to the course topics
- Second paragraph: how the gaps were identified (Skills Frameworks, employer \
feedback, industry consultation, surveys)
- Then 3-5 benefit bullets, each starting with \"- \" and a verb phrase
- Write in a professional, factual tone; no headings or markdown formatting

Respond with ONLY the text, nothing else.";

pub const INSTRUCTION_METHOD: &str = "\
You are an expert instructional designer for professional training and continuing \
education programmes. Explain why the given instructional method is appropriate for \
achieving the learning outcomes of the following course.

Course Title: {course_title}

Course Topics:
{course_topics}

Instructional Method: {method_name}

Guidelines:
- Explain how the method supports learning of these specific topics
- Reference adult learning principles where applicable
- Describe how it supports retention and practical application at work
- Write one paragraph of 80-150 words without markdown formatting

Respond with ONLY the paragraph text, nothing else.";

pub const ASSESSMENT_METHOD: &str = "\
You are an expert assessment designer for professional training and continuing \
education programmes. Explain why the given assessment method is appropriate for \
evaluating the learning outcomes of the following course.

Course Title: {course_title}

Course Topics:
{course_topics}

Assessment Method: {method_name}

Guidelines:
- Explain what evidence of competency the method gathers for these topics
- Describe how it ensures validity, reliability and fairness
- Write one paragraph of 80-150 words without markdown formatting

Respond with ONLY the paragraph text, nothing else.";

pub const MINIMUM_ENTRY_REQUIREMENT: &str = "\
You are an expert course description writer for professional training and continuing \
education programmes. Write the \"Minimum Entry Requirement\" section for the following \
course.

Course Title: {course_title}

Course Topics:
{course_topics}

Guidelines:
- Group requirements under Knowledge and Skills, Attitude, and Experience
- State educational qualifications and language proficiency under Knowledge and Skills
- State the minimum years of working experience under Experience
- End with a target age group line (typically 21-65 years old)
- Use the bullet character \u{2022} for each requirement; no markdown formatting
- The entire response must NOT exceed 2000 characters

Respond with ONLY the text, nothing else.";

pub const JOB_ROLES: &str = "\
You are an expert in workforce development and skills frameworks. Suggest 3 job roles \
that are directly relevant to the following course, using official skills-framework \
job titles.

Course Title: {course_title}

Course Topics:
{course_topics}

Guidelines:
- Number the roles 1 to 3, each followed by a 1-2 sentence description of relevance
- Do NOT use markdown formatting
- The entire response must NOT exceed 2000 characters

Respond with ONLY the numbered job roles and descriptions, nothing else.";

pub const LESSON_PLAN: &str = "\
You are an expert instructional designer. Write a narrative lesson plan overview for the \
following course, describing how each topic is delivered across the training days.

Course Title: {course_title}

Course Topics:
{course_topics}

Course Duration: {course_duration} hours
Instructional Duration: {instructional_duration} hours
Assessment Duration: {assessment_duration} hours
Instructional Methods: {instructional_methods}
Assessment Methods: {assessment_methods}

Guidelines:
- Training runs 9:00 AM to 6:00 PM daily with a 45-minute lunch break
- For each topic, describe the activities and which instructional methods are used
- Mention when the assessment takes place on the final day, if any
- Keep the tone professional; plain text only

Respond with ONLY the lesson plan text, nothing else.";

/// Course-topic outline generation (Course Details page).
pub const COURSE_TOPICS: &str = "\
You are an expert curriculum designer. Propose the topic outline for the following course.

Course Title: {course_title}
Number of Days: {num_days}
{skill_context}
Special Requirements: {special_requirements}

Guidelines:
- Propose 2-3 topics per day and no more than {max_topics} topics in total
- Format every topic heading exactly as: ## Topic <number>: <topic name>
- Under each heading list 2-4 learning points, each starting with \"- \"
- Do not add any other headings or commentary

Respond with ONLY the topic outline, nothing else.";

/// Default template for a section.
pub fn default_template(section: &Section) -> &'static str {
    match section {
        Section::AboutCourse => ABOUT_COURSE,
        Section::WhatYoullLearn => WHAT_YOULL_LEARN,
        Section::BackgroundPartA => BACKGROUND_PART_A,
        Section::BackgroundPartB => BACKGROUND_PART_B,
        Section::MinimumEntryRequirement => MINIMUM_ENTRY_REQUIREMENT,
        Section::JobRoles => JOB_ROLES,
        Section::LessonPlanNarrative => LESSON_PLAN,
        Section::InstructionMethod(_) => INSTRUCTION_METHOD,
        Section::AssessmentMethod(_) => ASSESSMENT_METHOD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::placeholders;

    #[test]
    fn test_default_templates_use_allowed_placeholders() {
        let mut sections: Vec<Section> = Section::FIXED.to_vec();
        sections.push(Section::InstructionMethod("Case studies".to_string()));
        sections.push(Section::AssessmentMethod("Written Exam".to_string()));
        for section in sections {
            let names = placeholders(default_template(&section)).unwrap();
            for name in &names {
                assert!(
                    section.allowed_placeholders().contains(&name.as_str()),
                    "{} uses {{{}}}",
                    section,
                    name
                );
            }
            assert!(names.contains(&"course_title".to_string()));
        }
    }

    #[test]
    fn test_course_topics_placeholders() {
        let names = placeholders(COURSE_TOPICS).unwrap();
        assert_eq!(
            names,
            vec![
                "course_title",
                "num_days",
                "skill_context",
                "special_requirements",
                "max_topics"
            ]
        );
    }
}
