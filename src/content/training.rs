use once_cell::sync::Lazy;

/// How a training item is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryFormat {
    ELearning,
    WorkshopSlides,
    PdfGuide,
}

impl std::fmt::Display for DeliveryFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryFormat::ELearning => write!(f, "eLearning"),
            DeliveryFormat::WorkshopSlides => write!(f, "Workshop Slides"),
            DeliveryFormat::PdfGuide => write!(f, "PDF Guide"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingMaterial {
    pub id: String,
    pub title: String,
    pub format: DeliveryFormat,
    pub duration_hours: f32,
    pub audience: String,
    /// Launch target. The placeholder catalogue links to `#`.
    pub link: String,
    pub icon: String,
    pub description: String,
    pub objectives: Vec<String>,
    pub recommended_reading: String,
}

static CATALOG: Lazy<Vec<TrainingMaterial>> = Lazy::new(|| {
    vec![
        TrainingMaterial {
            id: "TRN-101".into(),
            title: "A3 Thinking: The Art of Problem Solving on a Single Page".into(),
            format: DeliveryFormat::ELearning,
            duration_hours: 2.5,
            audience: "Engineers, Team Leads, Managers".into(),
            link: "#".into(),
            icon: "📝".into(),
            description: "This module explores the Toyota Production System's powerful A3 methodology, which structures problem-solving into a narrative format on a single sheet of A3-sized paper. It is a tool for mentorship, clear communication, and data-driven decision making.".into(),
            objectives: vec![
                "Understand the 7 sections of a standard A3 Report.".into(),
                "Frame a problem statement effectively.".into(),
                "Use the PDCA (Plan-Do-Check-Act) cycle within the A3 framework.".into(),
                "Visually communicate root cause analysis and countermeasures.".into(),
            ],
            recommended_reading: "'Managing to Learn' by John Shook".into(),
        },
        TrainingMaterial {
            id: "TRN-102".into(),
            title: "Statistical Process Control (SPC) Masterclass".into(),
            format: DeliveryFormat::WorkshopSlides,
            duration_hours: 8.0,
            audience: "Quality Engineers, Process Technicians".into(),
            link: "#".into(),
            icon: "📊".into(),
            description: "A deep dive into the principles of Dr. W. Edwards Deming and Walter Shewhart. This workshop provides the statistical foundation for understanding process variation, distinguishing between common and special causes, and using control charts to monitor and improve process stability.".into(),
            objectives: vec![
                "Calculate control limits for I-MR, Xbar-R, and p-charts.".into(),
                "Interpret control chart signals (e.g., Nelson Rules).".into(),
                "Define and calculate process capability indices (Cp, Cpk).".into(),
                "Understand the relationship between process control and process capability.".into(),
            ],
            recommended_reading: "'Understanding Variation: The Key to Managing Chaos' by Donald J. Wheeler".into(),
        },
        TrainingMaterial {
            id: "TRN-103".into(),
            title: "Leading Kaizen Events: A Facilitator's Guide".into(),
            format: DeliveryFormat::PdfGuide,
            duration_hours: 4.0,
            audience: "MBB, Black Belts, CI Leads".into(),
            link: "#".into(),
            icon: "🤝".into(),
            description: "This guide provides a practical, step-by-step framework for planning, executing, and sustaining a successful week-long Kaizen event. It covers team selection, scoping, daily management, and follow-up activities to ensure that improvements are not only made but also maintained.".into(),
            objectives: vec![
                "Develop a compelling Kaizen charter.".into(),
                "Manage team dynamics and engage stakeholders.".into(),
                "Facilitate brainstorming and root cause analysis sessions.".into(),
                "Establish a 30-day follow-up plan to ensure sustainability.".into(),
            ],
            recommended_reading: "'Kaizen: The Key to Japan's Competitive Success' by Masaaki Imai".into(),
        },
        TrainingMaterial {
            id: "TRN-104".into(),
            title: "Failure Mode and Effects Analysis (FMEA)".into(),
            format: DeliveryFormat::ELearning,
            duration_hours: 3.0,
            audience: "Engineering, R&D, Quality".into(),
            link: "#".into(),
            icon: "🛡️".into(),
            description: "Learn to proactively identify and mitigate risks in product and process design. This module teaches the systematic approach of FMEA to anticipate potential failures, assess their impact, and implement robust controls before problems reach the customer.".into(),
            objectives: vec![
                "Distinguish between Design FMEAs and Process FMEAs.".into(),
                "Calculate Risk Priority Numbers (RPN).".into(),
                "Develop effective detection and prevention controls.".into(),
                "Integrate FMEA into the product development lifecycle.".into(),
            ],
            recommended_reading: "'The FMEA Pocket Handbook' by D. H. Stamatis".into(),
        },
        TrainingMaterial {
            id: "TRN-105".into(),
            title: "Value Stream Mapping (VSM)".into(),
            format: DeliveryFormat::WorkshopSlides,
            duration_hours: 6.0,
            audience: "Operations, CI Leads, Management".into(),
            link: "#".into(),
            icon: "🌊".into(),
            description: "This workshop teaches you how to see the flow of value and, more importantly, the flow of waste. Learn to create current-state and future-state maps that visualize not just material flow, but information flow, to design truly lean systems from end to end.".into(),
            objectives: vec![
                "Identify a value stream and its product family.".into(),
                "Calculate key metrics like Lead Time, Process Time, and Process Cycle Efficiency.".into(),
                "Draw current-state and future-state maps using standard iconography.".into(),
                "Develop a Kaizen-based implementation plan.".into(),
            ],
            recommended_reading: "'Learning to See' by Mike Rother and John Shook".into(),
        },
    ]
});

/// Curated training materials, in curriculum order.
pub fn training_catalog() -> &'static [TrainingMaterial] {
    &CATALOG
}
