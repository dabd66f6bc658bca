/// Confidence level attached to a citation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn label(self) -> &'static str {
        match self {
            Confidence::High => "High",
            Confidence::Medium => "Medium",
            Confidence::Low => "Low",
        }
    }
}

/// One claim with its supporting citation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    pub claim: String,
    pub source: String,
    pub page: u32,
    pub confidence: Confidence,
}

/// The structured result of a generation run.
///
/// In this shell the payload is a constant: every generation attempt yields
/// the same report regardless of query or attachments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub key_takeaways: Vec<String>,
    pub evidence: Vec<Citation>,
    pub summary: String,
    pub live_update_available: bool,
}

impl Report {
    /// The fixed payload attached on every completed generation.
    pub fn canned() -> Self {
        Report {
            key_takeaways: vec![
                "Solar panel efficiency has increased by 23% in the past 2 years".to_string(),
                "Wind energy costs have decreased by 18% globally".to_string(),
                "Energy storage solutions are becoming more cost-effective".to_string(),
                "Government incentives are driving adoption in emerging markets".to_string(),
                "Green hydrogen production is scaling rapidly".to_string(),
            ],
            evidence: vec![
                Citation {
                    claim: "Solar panel efficiency improvements".to_string(),
                    source: "International Energy Agency Report 2024".to_string(),
                    page: 45,
                    confidence: Confidence::High,
                },
                Citation {
                    claim: "Wind energy cost reduction".to_string(),
                    source: "Global Wind Energy Council Analysis".to_string(),
                    page: 23,
                    confidence: Confidence::Medium,
                },
                Citation {
                    claim: "Energy storage cost trends".to_string(),
                    source: "Bloomberg Energy Storage Outlook".to_string(),
                    page: 67,
                    confidence: Confidence::High,
                },
            ],
            summary: "The renewable energy sector is experiencing unprecedented growth \
                      with significant technological advances across solar, wind, and \
                      storage solutions. Cost reductions and efficiency improvements are \
                      making renewable energy increasingly competitive with traditional \
                      fossil fuels, while government policies worldwide are accelerating \
                      adoption rates."
                .to_string(),
            live_update_available: true,
        }
    }
}
