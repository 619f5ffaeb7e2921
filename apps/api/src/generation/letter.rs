//! Letter Renderer: deterministic substitution into the fixed cover-letter skeleton.
//!
//! Pure function of its inputs. The date is passed in so output never depends on the clock.

use crate::generation::domain::Domain;
use crate::models::resume::Resume;

const CONTACT_SEPARATOR: &str = " | ";

const CLOSING_PARAGRAPH: &str = "I value clear outcomes over buzzwords. \
    I'd welcome the chance to walk through how I would contribute from the first week.";

/// Everything the renderer needs for one letter.
#[derive(Debug, Clone)]
pub struct LetterInput<'a> {
    pub resume: &'a Resume,
    pub company: &'a str,
    pub role: &'a str,
    pub bullets: &'a [String],
    pub domain: Domain,
    pub today: &'a str,
}

/// Opening sentence placed directly above the bullet list.
pub fn lead_in(domain: Domain) -> &'static str {
    match domain {
        Domain::Hospitality => {
            "In fast-paced service settings I've kept guests happy while holding food safety standards high:"
        }
        Domain::Retail => {
            "On the shop floor I've run POS systems accurately and put customer service first:"
        }
        Domain::Software => {
            "I focus on shipping working software and keeping code quality high:"
        }
        Domain::Generic => "Relevant highlights:",
    }
}

/// Renders the complete cover letter.
pub fn render_letter(input: &LetterInput<'_>) -> String {
    let resume = input.resume;

    let mut opening = String::new();
    if let Some(summary) = non_blank(resume.summary.as_deref()) {
        opening.push_str(summary);
        opening.push(' ');
    }
    opening.push_str(&format!(
        "I'm applying for the {} role at {}. \
        Below are a few reasons I'm a strong match for your requirements:",
        input.role, input.company
    ));

    let bullet_lines: String = input
        .bullets
        .iter()
        .map(|b| format!("- {b}\n"))
        .collect();

    format!(
        "{name}\n\
        {contact}\n\
        \n\
        {today}\n\
        \n\
        Hiring Manager\n\
        {company}\n\
        \n\
        Re: {role}\n\
        \n\
        Dear Hiring Team,\n\
        \n\
        {opening}\n\
        \n\
        {lead_in}\n\
        {bullet_lines}\
        \n\
        {closing}\n\
        \n\
        Kind regards,\n\
        {name}\n",
        name = resume.name,
        contact = contact_line(resume),
        today = input.today,
        company = input.company,
        role = input.role,
        opening = opening,
        lead_in = lead_in(input.domain),
        bullet_lines = bullet_lines,
        closing = CLOSING_PARAGRAPH,
    )
}

/// location | email | phone | links, skipping any segment that is absent or blank.
pub fn contact_line(resume: &Resume) -> String {
    let links = resume
        .links
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    [
        non_blank(resume.location.as_deref()),
        non_blank(Some(resume.email.as_str())),
        non_blank(resume.phone.as_deref()),
        non_blank(Some(links.as_str())),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(CONTACT_SEPARATOR)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Experience, Resume};

    const TODAY: &str = "19 October 2026";

    fn make_resume() -> Resume {
        Resume {
            name: "Jordan Lee".to_string(),
            email: "jordan@example.com".to_string(),
            phone: Some("+1 555 0100".to_string()),
            location: Some("Portland, OR".to_string()),
            links: vec![
                "https://github.com/jlee".to_string(),
                "https://jlee.dev".to_string(),
            ],
            summary: Some("Line cook turned events lead.".to_string()),
            skills: vec!["catering".to_string()],
            experience: vec![Experience {
                company: "Harbor Hotel".to_string(),
                title: "Events Lead".to_string(),
                start: "2021".to_string(),
                end: "Present".to_string(),
                bullets: vec!["Managed banquet catering for 200 guests".to_string()],
            }],
            education: vec![],
        }
    }

    fn render(resume: &Resume, bullets: &[String], domain: Domain) -> String {
        render_letter(&LetterInput {
            resume,
            company: "Seaside Resorts",
            role: "Banquet Manager",
            bullets,
            domain,
            today: TODAY,
        })
    }

    #[test]
    fn test_full_letter_layout() {
        let resume = make_resume();
        let bullets = vec!["Managed banquet catering for 200 guests".to_string()];
        let letter = render(&resume, &bullets, Domain::Generic);

        let expected = "Jordan Lee\n\
            Portland, OR | jordan@example.com | +1 555 0100 | https://github.com/jlee, https://jlee.dev\n\
            \n\
            19 October 2026\n\
            \n\
            Hiring Manager\n\
            Seaside Resorts\n\
            \n\
            Re: Banquet Manager\n\
            \n\
            Dear Hiring Team,\n\
            \n\
            Line cook turned events lead. I'm applying for the Banquet Manager role at Seaside Resorts. \
            Below are a few reasons I'm a strong match for your requirements:\n\
            \n\
            Relevant highlights:\n\
            - Managed banquet catering for 200 guests\n\
            \n\
            I value clear outcomes over buzzwords. \
            I'd welcome the chance to walk through how I would contribute from the first week.\n\
            \n\
            Kind regards,\n\
            Jordan Lee\n";
        assert_eq!(letter, expected);
    }

    #[test]
    fn test_contact_line_omits_missing_phone_and_links() {
        let mut resume = make_resume();
        resume.phone = None;
        resume.links = vec![];
        assert_eq!(contact_line(&resume), "Portland, OR | jordan@example.com");

        let letter = render(&resume, &[], Domain::Generic);
        assert!(!letter.contains("| |"));
        assert!(!letter.contains("|\n"));
    }

    #[test]
    fn test_contact_line_without_location_has_no_leading_separator() {
        let mut resume = make_resume();
        resume.location = None;
        resume.phone = Some("   ".to_string());
        resume.links = vec![" ".to_string()];
        assert_eq!(contact_line(&resume), "jordan@example.com");
    }

    #[test]
    fn test_summary_omitted_when_absent() {
        let mut resume = make_resume();
        resume.summary = None;
        let letter = render(&resume, &[], Domain::Generic);
        assert!(letter.contains(
            "Dear Hiring Team,\n\nI'm applying for the Banquet Manager role at Seaside Resorts."
        ));
    }

    #[test]
    fn test_lead_in_matches_domain() {
        let resume = make_resume();
        let bullets = vec!["Shipped a thing".to_string()];

        let hospitality = render(&resume, &bullets, Domain::Hospitality);
        assert!(hospitality.contains("food safety"));

        let retail = render(&resume, &bullets, Domain::Retail);
        assert!(retail.contains("POS systems") && retail.contains("customer service"));

        let software = render(&resume, &bullets, Domain::Software);
        assert!(software.contains("shipping working software") && software.contains("code quality"));

        // lead-in sits directly above the bullets
        assert!(software.contains(&format!("{}\n- Shipped a thing\n", lead_in(Domain::Software))));
    }

    #[test]
    fn test_rendering_is_pure() {
        let resume = make_resume();
        let bullets = vec!["a".to_string(), "b".to_string()];
        assert_eq!(
            render(&resume, &bullets, Domain::Retail),
            render(&resume, &bullets, Domain::Retail)
        );
    }

    #[test]
    fn test_signature_repeats_name() {
        let resume = make_resume();
        let letter = render(&resume, &[], Domain::Generic);
        assert!(letter.ends_with("Kind regards,\nJordan Lee\n"));
        assert!(letter.starts_with("Jordan Lee\n"));
    }
}
