//! Hard-coded screen content. Every value here is a display literal; none of
//! it is computed or fetched.

use chrono::DateTime;

pub struct UsageStats {
    pub questions_asked: u32,
    pub reports_generated: u32,
    pub credits_used: u32,
    pub credits_total: u32,
    pub credits_remaining: u32,
}

pub const USAGE_STATS: UsageStats = UsageStats {
    questions_asked: 3,
    reports_generated: 3,
    credits_used: 3,
    credits_total: 50,
    credits_remaining: 47,
};

pub struct BillingOverview {
    pub current_plan: &'static str,
    pub monthly_spend: &'static str,
    pub billing_cycle: &'static str,
    pub current_period_start: &'static str,
    pub next_billing_date: &'static str,
}

pub const BILLING: BillingOverview = BillingOverview {
    current_plan: "Pro",
    monthly_spend: "$29.99",
    billing_cycle: "monthly",
    current_period_start: "2024-01-15",
    next_billing_date: "2024-02-15",
};

pub struct UsageEvent {
    pub date: &'static str,
    pub action: &'static str,
    pub topic: &'static str,
    pub credits_used: u32,
}

pub const USAGE_HISTORY: [UsageEvent; 3] = [
    UsageEvent {
        date: "2024-01-15",
        action: "Report Generated",
        topic: "Renewable Energy Trends",
        credits_used: 1,
    },
    UsageEvent {
        date: "2024-01-12",
        action: "Report Generated",
        topic: "AI in Healthcare",
        credits_used: 1,
    },
    UsageEvent {
        date: "2024-01-10",
        action: "Report Generated",
        topic: "Remote Work Economics",
        credits_used: 1,
    },
];

pub struct PlanOption {
    pub name: &'static str,
    pub monthly_price: &'static str,
    pub credits: u32,
    pub features: &'static [&'static str],
    pub current: bool,
}

pub const PLANS: [PlanOption; 3] = [
    PlanOption {
        name: "Starter",
        monthly_price: "$9.99",
        credits: 15,
        features: &["15 research reports", "Basic citations", "Email support"],
        current: false,
    },
    PlanOption {
        name: "Pro",
        monthly_price: "$29.99",
        credits: 50,
        features: &[
            "50 research reports",
            "Advanced citations",
            "Priority support",
            "Export options",
        ],
        current: true,
    },
    PlanOption {
        name: "Enterprise",
        monthly_price: "$99.99",
        credits: 200,
        features: &[
            "200 research reports",
            "Premium features",
            "Dedicated support",
            "API access",
        ],
        current: false,
    },
];

pub struct ReportRow {
    pub question: &'static str,
    pub summary: &'static str,
    pub generated_at: &'static str,
    pub status: &'static str,
    pub documents: u32,
    pub key_takeaways: u32,
    pub pages: u32,
}

pub const REPORT_HISTORY: [ReportRow; 5] = [
    ReportRow {
        question: "What are the latest trends in renewable energy technology?",
        summary: "Comprehensive analysis of solar, wind, and energy storage innovations \
                  with market impact assessment.",
        generated_at: "2024-01-15T10:30:00Z",
        status: "completed",
        documents: 5,
        key_takeaways: 5,
        pages: 12,
    },
    ReportRow {
        question: "How is artificial intelligence transforming healthcare?",
        summary: "Deep dive into AI applications in diagnostics, treatment planning, and \
                  patient care optimization.",
        generated_at: "2024-01-12T14:22:00Z",
        status: "completed",
        documents: 8,
        key_takeaways: 7,
        pages: 18,
    },
    ReportRow {
        question: "What are the economic impacts of remote work policies?",
        summary: "Analysis of productivity, cost savings, and organizational changes in \
                  the post-pandemic workplace.",
        generated_at: "2024-01-10T09:15:00Z",
        status: "completed",
        documents: 3,
        key_takeaways: 4,
        pages: 8,
    },
    ReportRow {
        question: "Climate change adaptation strategies for coastal cities",
        summary: "Research on infrastructure, policy, and community-based solutions for \
                  sea-level rise mitigation.",
        generated_at: "2024-01-08T16:45:00Z",
        status: "completed",
        documents: 6,
        key_takeaways: 6,
        pages: 15,
    },
    ReportRow {
        question: "Emerging trends in sustainable agriculture practices",
        summary: "Investigation of precision farming, vertical agriculture, and \
                  regenerative farming techniques.",
        generated_at: "2024-01-05T11:30:00Z",
        status: "completed",
        documents: 4,
        key_takeaways: 5,
        pages: 10,
    },
];

pub struct ProfileInfo {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: &'static str,
    pub organization: &'static str,
    pub initials: &'static str,
    pub plan: &'static str,
}

pub const PROFILE: ProfileInfo = ProfileInfo {
    first_name: "John",
    last_name: "Researcher",
    email: "john.researcher@example.com",
    organization: "University of Research",
    initials: "JR",
    plan: "Pro Plan",
};

pub struct NotificationSetting {
    pub name: &'static str,
    pub description: &'static str,
    pub enabled: bool,
}

pub const NOTIFICATION_SETTINGS: [NotificationSetting; 3] = [
    NotificationSetting {
        name: "Email Notifications",
        description: "Receive email updates about your research reports",
        enabled: true,
    },
    NotificationSetting {
        name: "Live Updates",
        description: "Get notified when new information is available for your reports",
        enabled: true,
    },
    NotificationSetting {
        name: "Usage Alerts",
        description: "Alert me when I'm running low on credits",
        enabled: true,
    },
];

pub struct LandingFeature {
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const LANDING_PROBLEMS: [LandingFeature; 3] = [
    LandingFeature {
        title: "Search Engines",
        blurb: "Search engines return links, not answers. You waste time clicking through \
                multiple sources to find what you need.",
    },
    LandingFeature {
        title: "Chatbots",
        blurb: "Chatbots only handle one file at a time. Complex research requires \
                analyzing multiple documents simultaneously.",
    },
    LandingFeature {
        title: "Summarizers",
        blurb: "Summarizers skip citations, so results can't be trusted. Without proper \
                references, your work lacks credibility.",
    },
];

pub const LANDING_SOLUTIONS: [LandingFeature; 4] = [
    LandingFeature {
        title: "Multiple Upload",
        blurb: "Upload multiple PDFs or documents simultaneously for comprehensive analysis.",
    },
    LandingFeature {
        title: "Any Question",
        blurb: "Ask any research question and get intelligent, contextual answers.",
    },
    LandingFeature {
        title: "Structured Answers",
        blurb: "Get short, structured answers with proper citations you can trust.",
    },
    LandingFeature {
        title: "Live Updates",
        blurb: "Updated continuously with live news and blogs for current insights.",
    },
];

pub const LANDING_AUDIENCES: [LandingFeature; 3] = [
    LandingFeature {
        title: "Students",
        blurb: "Research faster, cite properly, get better grades",
    },
    LandingFeature {
        title: "Teachers",
        blurb: "Prepare lessons, verify sources, create materials",
    },
    LandingFeature {
        title: "Startups",
        blurb: "Market research, competitive analysis, trend insights",
    },
];

pub const LANDING_TAGLINE: &str =
    "An AI-powered tool that helps students, teachers, and startups save time by providing \
     reliable, evidence-based research reports with citations.";

pub const LANDING_FOOTER: &str = "© 2024 Smart Research Assistant. Built for better research.";

/// Formats a fixed RFC 3339 or `YYYY-MM-DD` literal for display, e.g.
/// "Jan 15, 2024". Falls back to the raw literal if it does not parse.
pub fn format_date(raw: &str) -> String {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return timestamp.format("%b %-d, %Y").to_string();
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %-d, %Y").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc3339_literals_format_as_dates() {
        assert_eq!(format_date("2024-01-15T10:30:00Z"), "Jan 15, 2024");
    }

    #[test]
    fn plain_dates_format_too() {
        assert_eq!(format_date("2024-02-15"), "Feb 15, 2024");
        assert_eq!(format_date("2024-01-05"), "Jan 5, 2024");
    }

    #[test]
    fn unparseable_literals_pass_through() {
        assert_eq!(format_date("soon"), "soon");
    }

    #[test]
    fn credit_totals_are_consistent() {
        assert_eq!(
            USAGE_STATS.credits_used + USAGE_STATS.credits_remaining,
            USAGE_STATS.credits_total
        );
    }
}
