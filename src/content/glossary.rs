use hashlink::LinkedHashMap;
use once_cell::sync::Lazy;

/// A single glossary entry. `formula` is an optional plain-text mathematical
/// definition rendered in a highlighted block under the term.
#[derive(Debug, Clone, PartialEq)]
pub struct GlossaryTerm {
    pub term: String,
    pub definition: String,
    pub formula: Option<String>,
}

impl GlossaryTerm {
    fn new(term: &str, definition: &str) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            formula: None,
        }
    }

    fn with_formula(term: &str, definition: &str, formula: &str) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            formula: Some(formula.into()),
        }
    }
}

static GLOSSARY: Lazy<LinkedHashMap<String, Vec<GlossaryTerm>>> = Lazy::new(|| {
    let mut map = LinkedHashMap::new();
    map.insert(
        "Lean Principles".to_string(),
        vec![
            GlossaryTerm::with_formula(
                "Takt Time",
                "The rate at which a finished product needs to be completed to meet customer demand. It is the 'heartbeat' of a lean system.",
                "Takt Time = Available Production Time per Day / Customer Demand per Day",
            ),
            GlossaryTerm::new(
                "Gemba (現場)",
                "Japanese for 'the real place.' It refers to the location where value is created, such as the factory floor or a service desk.",
            ),
            GlossaryTerm::new(
                "Kaizen (改善)",
                "A strategy of 'Continuous Improvement' where small, ongoing, positive changes are made to a process. It emphasizes employee involvement and a culture of incremental enhancement.",
            ),
            GlossaryTerm::new(
                "Muda (無駄), Mura (斑), Muri (無理)",
                "The '3 M's' of waste in the Toyota Production System. **Muda:** Non-value-added waste. **Mura:** Unevenness or irregularity. **Muri:** Overburdening equipment or operators.",
            ),
            GlossaryTerm::new(
                "Muda (無駄)",
                "Japanese for 'waste.' It refers to any activity that consumes resources but creates no value for the customer. The 7 classic wastes are: Transport, Inventory, Motion, Waiting, Overproduction, Over-processing, and Defects (TIMWOOD).",
            ),
            GlossaryTerm::new(
                "Jidoka (自働化)",
                "Autonomation or 'automation with a human touch.' The principle of designing equipment to stop automatically and signal immediately when a problem occurs, preventing the mass production of defects.",
            ),
            GlossaryTerm::new(
                "Heijunka (平準化)",
                "Production leveling. The process of smoothing the type and quantity of production over a fixed period. This reduces Mura (unevenness) and minimizes inventory.",
            ),
            GlossaryTerm::new(
                "Kanban (看板)",
                "A scheduling system for lean manufacturing and just-in-time manufacturing (JIT). It is a visual signal (e.g., a card) that triggers an action, such as replenishing a part.",
            ),
            GlossaryTerm::new(
                "Poka-Yoke (ポカヨケ)",
                "A 'mistake-proofing' mechanism. Any technique in a process that helps to avoid errors by preventing, correcting, or drawing attention to them as they occur.",
            ),
            GlossaryTerm::new(
                "Value Stream Mapping (VSM)",
                "A flowchart method used to visualize, analyze, and improve all the steps in a product delivery process, from raw materials to the customer. It helps identify and eliminate waste (Muda).",
            ),
            GlossaryTerm::new(
                "5S",
                "A workplace organization method based on five Japanese words: Seiri (Sort), Seiton (Set in Order), Seisō (Shine), Seiketsu (Standardize), and Shitsuke (Sustain).",
            ),
        ],
    );
    map.insert(
        "Six Sigma Concepts".to_string(),
        vec![
            GlossaryTerm::new(
                "DMAIC",
                "The core data-driven improvement cycle: **D**efine the problem, **M**easure key aspects of the current process, **A**nalyze the data to investigate root causes, **I**mprove the process, and **C**ontrol the future state.",
            ),
            GlossaryTerm::with_formula(
                "DPMO (Defects Per Million Opportunities)",
                "A key metric for process performance. It represents the number of defects in a process per one million opportunities. A Six Sigma process aims for 3.4 DPMO.",
                "DPMO = Number of Defects / (Number of Units × Opportunities per Unit) × 1,000,000",
            ),
            GlossaryTerm::with_formula(
                "Process Capability (Cp)",
                "Measures the potential capability of a process, assuming it is perfectly centered between the specification limits. It answers: 'Is the process spread narrow enough?'",
                "Cp = (USL - LSL) / 6σ",
            ),
            GlossaryTerm::with_formula(
                "Process Capability (Cpk)",
                "Measures the actual capability of a process, accounting for its centering. It represents the 'worst-case' side of the process distribution. A Cpk of >1.33 is often a minimum target.",
                "Cpk = min((USL - μ) / 3σ, (μ - LSL) / 3σ)",
            ),
            GlossaryTerm::new(
                "COPQ (Cost of Poor Quality)",
                "The total financial loss incurred from producing defective products or services. Includes internal failure costs (scrap, rework) and external failure costs (warranty claims, returns).",
            ),
            GlossaryTerm::new(
                "Voice of the Customer (VOC)",
                "The process of capturing customer expectations, preferences, and aversions. The VOC is translated into Critical-to-Quality (CTQ) requirements for the process.",
            ),
            GlossaryTerm::with_formula(
                "Rolled Throughput Yield (RTY)",
                "The probability that a multi-step process will produce a defect-free unit. It is the product of the First Time Yields (FTY) of each process step.",
                "RTY = FTY₁ × FTY₂ × ... × FTYₙ",
            ),
        ],
    );
    map.insert(
        "Statistical & Analytical Methods".to_string(),
        vec![
            GlossaryTerm::with_formula(
                "Control Chart Limits",
                "The horizontal lines on a control chart (UCL/LCL) that represent the 'voice of the process.' They are calculated from the process data and typically set at ±3 standard deviations from the center line.",
                "UCL/LCL = μ ± 3σ",
            ),
            GlossaryTerm::new(
                "Hypothesis Testing",
                "A formal statistical procedure used to accept or reject a claim about a process or population based on sample data. It involves a Null Hypothesis (H₀, the status quo) and an Alternative Hypothesis (Hₐ).",
            ),
            GlossaryTerm::new(
                "p-value",
                "The probability of obtaining test results at least as extreme as the results actually observed, assuming the null hypothesis is correct. A small p-value (typically ≤ 0.05) indicates strong evidence against the null hypothesis.",
            ),
            GlossaryTerm::new(
                "ANOVA (Analysis of Variance)",
                "A statistical test used to determine whether there are any statistically significant differences between the means of two or more independent groups.",
            ),
            GlossaryTerm::new(
                "Confidence Interval",
                "A range of values, derived from sample statistics, that is likely to contain the value of an unknown population parameter. A 95% confidence interval means we are 95% confident the true population mean lies within that range.",
            ),
            GlossaryTerm::new(
                "Gage R&R (Repeatability & Reproducibility)",
                "A statistical study to evaluate the precision of a measurement system. **Repeatability** is the variation from the same operator using the same tool. **Reproducibility** is the variation between different operators using the same tool.",
            ),
            GlossaryTerm::new(
                "Regression Analysis",
                "A set of statistical processes for estimating the relationships between a dependent variable (the 'output' or 'Y') and one or more independent variables (the 'inputs' or 'X's).",
            ),
            GlossaryTerm::new(
                "Design of Experiments (DOE)",
                "A systematic method to determine the relationship between factors affecting a process and the output of that process. Used to find the optimal 'recipe' for a process with minimal experimental runs.",
            ),
        ],
    );
    map.insert(
        "AI/ML for Operations".to_string(),
        vec![
            GlossaryTerm::new(
                "Supervised Learning",
                "A type of machine learning where the model learns from data that has been manually labeled with the correct outcomes. Analogy: Learning with an 'answer key.' (e.g., training a model on historical data of 'Pass' vs. 'Fail' parts).",
            ),
            GlossaryTerm::new(
                "Unsupervised Learning",
                "A type of machine learning where the model works on its own to discover patterns and information in unlabeled data. Analogy: Finding hidden groups without an answer key. (e.g., K-Means clustering to find different failure modes).",
            ),
            GlossaryTerm::new(
                "Isolation Forest",
                "An unsupervised algorithm excellent for anomaly detection. It works by 'isolating' outliers, which are easier to separate from the main data cluster.",
            ),
            GlossaryTerm::new(
                "Random Forest",
                "A powerful supervised learning algorithm that is an 'ensemble' of many individual decision trees. It averages their predictions to produce a more accurate and stable result. Excellent for predictive quality tasks.",
            ),
            GlossaryTerm::new(
                "SHAP (SHapley Additive exPlanations)",
                "A game-theoretic approach used to explain the output of any machine learning model. It connects optimal credit allocation with local explanations to understand *why* a model made a specific prediction for a single instance.",
            ),
        ],
    );
    map
});

/// Glossary grouped by methodology family. Categories keep insertion order,
/// which is the order the glossary panel presents them in.
pub fn glossary() -> &'static LinkedHashMap<String, Vec<GlossaryTerm>> {
    &GLOSSARY
}
