use chrono::NaiveDate;
use once_cell::sync::Lazy;

/// One completed improvement event, captured in the shape of an A3 report.
#[derive(Debug, Clone, PartialEq)]
pub struct KaizenEvent {
    pub id: String,
    pub title: String,
    pub site: String,
    /// Day the event was closed out.
    pub date: NaiveDate,
    pub problem_background: String,
    /// Markdown body shown inside the detail expander.
    pub analysis_and_countermeasures: String,
    pub quantified_results: String,
    pub key_insight: String,
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

static EVENTS: Lazy<Vec<KaizenEvent>> = Lazy::new(|| {
    vec![
        KaizenEvent {
            id: "KZN-02".into(),
            title: "SMED on Stamping Press P-101".into(),
            site: "Andover, US".into(),
            date: day(2025, 6, 15),
            problem_background: "The Stamping Press P-101 has an average changeover time of 55 minutes, causing significant production downtime and limiting our ability to run smaller, more flexible batch sizes. This fails to meet the operational target of <15 minutes.".into(),
            analysis_and_countermeasures: r"- **Analysis:** A Gemba walk and video analysis (based on Shigeo Shingo's SMED methodology) revealed that 70% of changeover activities were 'internal' (machine stopped). Key opportunities included pre-staging dies, standardizing tools, and eliminating manual adjustments.
- **Countermeasures Implemented:**
  1. **Converted Internal to External:** Designed a pre-heating cart for the next die set.
  2. **Standardized Clamping:** Replaced multi-size bolts with standardized, quick-release clamps.
  3. **Introduced Poka-Yoke:** Added alignment pins to the die-set to eliminate measurement adjustments.
  4. **Created Standard Work:** Developed a one-page visual guide for the 2-person changeover team.".into(),
            quantified_results: "Reduced average changeover time from 55 minutes to 9 minutes (an 83% reduction). This unlocked an additional 120 minutes of production capacity per day and enabled an immediate move to a 'pull' system for downstream assembly.".into(),
            key_insight: "The biggest gains came not from operators working faster, but from eliminating entire steps of the process. True efficiency is in the design of the work itself, not the effort of the worker.".into(),
        },
        KaizenEvent {
            id: "KZN-01".into(),
            title: "5S Implementation in Main Assembly Cell".into(),
            site: "Eindhoven, NL".into(),
            date: day(2025, 5, 22),
            problem_background: "The Main Assembly cell was experiencing frequent micro-stoppages due to operators searching for tools, components, and fixtures. This introduced significant variability into the Takt time and was a source of operator frustration.".into(),
            analysis_and_countermeasures: r"- **Analysis:** A spaghetti diagram of operator movement during a single shift revealed over 400 meters of unnecessary walking. The root cause was a lack of standardized locations for tools and materials.
- **Countermeasures Implemented (5S):**
  1. **Sort:** Red-tagged all non-essential items; 3 skids of clutter were removed.
  2. **Set in Order:** Created shadow boards for all hand tools. Implemented a color-coded bin system for fasteners.
  3. **Shine:** Conducted a deep clean and established a daily 5-minute cleaning schedule.
  4. **Standardize:** Laminated standard work instructions for tool placement and end-of-shift cleanup.
  5. **Sustain:** Added 5S adherence to the daily Gemba walk checklist and supervisor standard work.".into(),
            quantified_results: "Eliminated 95% of 'searching' time, reducing average assembly time by 15%. Operator-reported ergonomic strain and frustration decreased significantly, confirmed by a post-event survey (results redacted for privacy).".into(),
            key_insight: "A clean and organized workplace is not about aesthetics; it is a prerequisite for quality and efficiency. When everything has a place, deviations from standard become immediately visible.".into(),
        },
        KaizenEvent {
            id: "KZN-04".into(),
            title: "Invoice Processing Lead Time Reduction".into(),
            site: "Corporate HQ".into(),
            date: day(2025, 7, 20),
            problem_background: "The average lead time from invoice receipt to payment approval is 18 days, causing late payment fees and straining supplier relationships. The goal was to reduce this to <5 days by eliminating non-value-added steps.".into(),
            analysis_and_countermeasures: r"- **Analysis:** A detailed process map and swimlane diagram revealed significant 'waiting' waste. 80% of the lead time was spent in queues awaiting manual review, data entry into three separate systems, and manager approval.
- **Countermeasures Implemented:**
  1. **Eliminated Redundant Data Entry:** Utilized robotic process automation (RPA) to sync data between systems after initial entry.
  2. **Established Standard Work:** Created a clear policy for approval thresholds, empowering clerks to approve payments below $5,000 without manager sign-off.
  3. **Visual Management:** Implemented a digital Kanban board (To Do, In Progress, Done) for full visibility of the invoice workload.".into(),
            quantified_results: "Reduced average lead time from 18 days to 3.5 days. Eliminated all late payment fees in the first quarter post-implementation, saving an estimated $120k annually.".into(),
            key_insight: "Lean principles are not just for the factory floor. Transactional processes are often filled with the most 'hidden' waste, offering huge opportunities for improvement.".into(),
        },
        KaizenEvent {
            id: "KZN-03".into(),
            title: "Root Cause Analysis (RCA) of Intermittent Sensor Failures".into(),
            site: "Shanghai, CN".into(),
            date: day(2025, 7, 1),
            problem_background: "The final test stage for the Affiniti Ultrasound system was experiencing a 4% failure rate due to intermittent 'Signal Lost' errors from a key pressure sensor, causing costly rework and diagnostic time.".into(),
            analysis_and_countermeasures: r"- **Analysis:** An Ishikawa (Fishbone) diagram was used to brainstorm potential causes. The '5 Whys' technique was then applied to the most likely cause, 'Incorrect Connector Seating'.
  1. **Why?** The connector was not fully seated.
  2. **Why?** The operator could not get enough leverage.
  3. **Why?** The access angle was awkward.
  4. **Why?** A new bracket was installed in a previous update.
  5. **Why? (Root Cause)** The bracket design did not account for tool clearance for the sensor connector.
- **Countermeasure Implemented:** A cross-functional team of engineering and manufacturing redesigned the bracket with an access cutout. A torque-limiting screwdriver with an audible 'click' was also introduced as a Poka-Yoke.".into(),
            quantified_results: "Reduced the specific 'Signal Lost' failure rate from 4% to 0.1% within one week of implementation. Rework costs were reduced by an estimated $250k annually.".into(),
            key_insight: "Technical problems are often symptoms of process or design flaws. Persistently asking 'Why' moves the team beyond blaming components or people to fixing the underlying system.".into(),
        },
    ]
});

/// Completed Kaizen events. Declaration order carries no meaning; the event
/// log orders by completion date when it renders.
pub fn kaizen_events() -> &'static [KaizenEvent] {
    &EVENTS
}
