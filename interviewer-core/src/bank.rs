//! Built-in question bank
//!
//! A deterministic [`QuestionGenerator`] that needs no network access.
//! Questions are grouped per domain into easy, medium and hard tiers and
//! picked from the tier matching the requested difficulty. Each tier holds
//! at least [`MAX_ROUNDS`] questions and the pick is indexed by round, so
//! one interview never sees the same question twice.

use async_trait::async_trait;

use crate::collaborators::{GeneratedQuestion, QuestionGenerator, QuestionRequest};
use crate::domain::Domain;
use crate::error::CollaboratorError;
use crate::scoring::Difficulty;
use crate::session::MAX_ROUNDS;

type Entry = (&'static str, &'static str);

const DATA_ANALYSIS_EASY: &[Entry] = &[
    (
        "What is the difference between the mean and the median of a dataset?",
        "The mean is the arithmetic average of all values while the median is the middle value when the data is sorted; the median is less sensitive to outliers.",
    ),
    (
        "What does a histogram show?",
        "A histogram shows the distribution of a numeric variable by counting how many values fall into each bin or interval.",
    ),
    (
        "What is a null value and why does it matter in analysis?",
        "A null value marks missing data; it matters because missing values can bias aggregates and must be handled by removal, imputation or explicit flagging.",
    ),
    (
        "What is the purpose of a pivot table?",
        "A pivot table summarizes data by grouping rows on one or more dimensions and aggregating measures such as sum, count or average.",
    ),
    (
        "What is the difference between a row and a column in a table?",
        "A row holds one record or observation, while a column holds one attribute or variable measured across all records.",
    ),
    (
        "What does the standard deviation measure?",
        "The standard deviation measures how spread out values are around the mean; a larger value means more dispersion.",
    ),
    (
        "What is a bar chart best used for?",
        "A bar chart compares a numeric measure across discrete categories using bars of proportional length.",
    ),
    (
        "What is the difference between qualitative and quantitative data?",
        "Qualitative data describes categories or labels, while quantitative data is numeric and can be counted or measured.",
    ),
    (
        "Why do analysts remove duplicate records?",
        "Duplicate records inflate counts and distort aggregates, so they are removed to keep totals and averages accurate.",
    ),
    (
        "What is a percentile?",
        "A percentile is the value below which a given percentage of observations fall; the 90th percentile exceeds ninety percent of the data.",
    ),
];

const DATA_ANALYSIS_MEDIUM: &[Entry] = &[
    (
        "Explain the difference between correlation and causation.",
        "Correlation measures how two variables move together, while causation means one variable directly changes the other; correlation alone can come from confounding variables or coincidence.",
    ),
    (
        "How would you detect outliers in a numeric column?",
        "Use the interquartile range rule, z-scores, or visual inspection with box plots and scatter plots, then investigate whether outliers are errors or genuine extreme values.",
    ),
    (
        "What is the difference between an inner join and a left join?",
        "An inner join keeps only rows with matching keys in both tables, while a left join keeps every row from the left table and fills unmatched right columns with nulls.",
    ),
    (
        "When would you use a log transformation on a variable?",
        "A log transformation is used for right-skewed data or multiplicative relationships, compressing large values so the distribution is closer to normal and variance is stabilized.",
    ),
    (
        "What is the central limit theorem and why is it useful?",
        "The central limit theorem says the distribution of sample means approaches a normal distribution as sample size grows, which allows confidence intervals and hypothesis tests on means.",
    ),
    (
        "How would you handle missing values in a dataset?",
        "Investigate why values are missing, then drop rows or columns, impute with mean, median or model predictions, or add an indicator flag depending on the amount and pattern.",
    ),
    (
        "What is the difference between a window function and a GROUP BY in SQL?",
        "GROUP BY collapses rows into one row per group, while a window function computes an aggregate over a partition but keeps every original row.",
    ),
    (
        "What is a confidence interval?",
        "A confidence interval is a range computed from sample data that would contain the true population parameter in a stated share of repeated samples, such as 95 percent.",
    ),
    (
        "How do you choose between a line chart and a scatter plot?",
        "Use a line chart for a variable ordered over time or sequence, and a scatter plot to show the relationship between two numeric variables.",
    ),
    (
        "What is data normalization and when is it needed?",
        "Normalization rescales numeric features to a common range or distribution so that variables with large scales do not dominate distance based or gradient based models.",
    ),
];

const DATA_ANALYSIS_HARD: &[Entry] = &[
    (
        "How do you design an A/B test and decide whether the result is significant?",
        "Define a hypothesis and metric, randomize users into control and treatment, compute the required sample size from power and effect size, then use a statistical test and p-value or confidence interval while avoiding peeking.",
    ),
    (
        "Explain Simpson's paradox with an example of how it misleads analysis.",
        "Simpson's paradox occurs when a trend appears in several groups but reverses when the groups are combined, because a confounding variable changes the group weights in the aggregate.",
    ),
    (
        "How would you handle multicollinearity in a regression model?",
        "Detect it with variance inflation factors or correlation matrices, then remove or combine correlated predictors, use regularization such as ridge regression, or apply principal component analysis.",
    ),
    (
        "What is the difference between precision and recall, and when do you favour one?",
        "Precision is the share of predicted positives that are correct, recall is the share of actual positives found; favour recall when missing positives is costly and precision when false alarms are costly.",
    ),
    (
        "How would you detect and correct for survivorship bias?",
        "Check whether the dataset only includes entities that passed a selection filter, recover the missing failures from historical or raw sources, and compare results with and without them.",
    ),
    (
        "Explain overfitting and how you would prevent it.",
        "Overfitting is when a model learns noise in training data and fails to generalize; prevent it with cross validation, regularization, simpler models, more data and early stopping.",
    ),
    (
        "How would you build a cohort retention analysis?",
        "Group users by signup period, track the share of each cohort active in each following period, and present the result as a retention matrix or curves.",
    ),
    (
        "What is the multiple comparisons problem and how do you address it?",
        "Running many hypothesis tests raises the chance of false positives; address it with corrections such as Bonferroni or false discovery rate control, or by pre registering hypotheses.",
    ),
    (
        "How would you forecast a seasonal time series?",
        "Decompose trend and seasonality, then fit models such as seasonal ARIMA, exponential smoothing or regression with seasonal features, validating on a holdout period.",
    ),
    (
        "How do you measure the causal effect of a change without an experiment?",
        "Use quasi experimental methods such as difference in differences, regression discontinuity, instrumental variables or matching, checking their assumptions carefully.",
    ),
];

const FINANCE_EASY: &[Entry] = &[
    (
        "What are the three main financial statements?",
        "The income statement, the balance sheet and the cash flow statement.",
    ),
    (
        "What is the difference between revenue and profit?",
        "Revenue is the total income from sales before expenses, while profit is what remains after subtracting costs, expenses and taxes from revenue.",
    ),
    (
        "What is working capital?",
        "Working capital is current assets minus current liabilities and measures short-term liquidity.",
    ),
    (
        "What does depreciation represent?",
        "Depreciation allocates the cost of a tangible asset over its useful life as a non-cash expense.",
    ),
    (
        "What is an asset?",
        "An asset is a resource owned by a company that is expected to provide future economic benefit, such as cash, inventory or equipment.",
    ),
    (
        "What is a liability?",
        "A liability is an obligation the company owes to others, such as loans, accounts payable or accrued expenses.",
    ),
    (
        "What is gross margin?",
        "Gross margin is revenue minus cost of goods sold, divided by revenue, showing the share of sales left after direct production costs.",
    ),
    (
        "What is the difference between cash and accrual accounting?",
        "Cash accounting records transactions when cash moves, while accrual accounting records revenue when earned and expenses when incurred.",
    ),
    (
        "What is a budget?",
        "A budget is a financial plan that estimates expected revenue and expenses for a future period to guide spending decisions.",
    ),
    (
        "What is accounts receivable?",
        "Accounts receivable is money customers owe the company for goods or services already delivered on credit.",
    ),
];

const FINANCE_MEDIUM: &[Entry] = &[
    (
        "Explain the time value of money.",
        "Money available today is worth more than the same amount in the future because it can be invested to earn interest; future cash flows are discounted to present value.",
    ),
    (
        "How are the three financial statements linked?",
        "Net income from the income statement flows into retained earnings on the balance sheet and starts the cash flow statement, whose ending cash balance appears on the balance sheet.",
    ),
    (
        "What is EBITDA and why do analysts use it?",
        "EBITDA is earnings before interest, taxes, depreciation and amortization; analysts use it to compare operating profitability independent of capital structure and accounting choices.",
    ),
    (
        "What is the difference between debt and equity financing?",
        "Debt financing borrows money that must be repaid with interest without giving up ownership, while equity financing sells ownership shares and has no repayment obligation but dilutes owners.",
    ),
    (
        "What is free cash flow?",
        "Free cash flow is operating cash flow minus capital expenditures, the cash available to repay debt or return to shareholders.",
    ),
    (
        "How do you interpret a current ratio?",
        "The current ratio divides current assets by current liabilities; above one means short term obligations are covered, while very high values can mean idle assets.",
    ),
    (
        "What is the difference between NPV and IRR?",
        "NPV is the present value of cash flows minus investment at a chosen discount rate, while IRR is the discount rate that makes NPV zero.",
    ),
    (
        "What is operating leverage?",
        "Operating leverage is the share of fixed costs in the cost structure; high operating leverage makes profit grow faster than revenue but also fall faster.",
    ),
    (
        "What is goodwill on a balance sheet?",
        "Goodwill is the amount paid in an acquisition above the fair value of identifiable net assets, tested for impairment rather than amortized.",
    ),
    (
        "How does a company's cash conversion cycle work?",
        "The cash conversion cycle is days inventory outstanding plus days sales outstanding minus days payables outstanding, measuring how long cash is tied up in operations.",
    ),
];

const FINANCE_HARD: &[Entry] = &[
    (
        "Walk through a discounted cash flow valuation.",
        "Project free cash flows, estimate a terminal value, discount both at the weighted average cost of capital to present value, and subtract net debt to reach equity value.",
    ),
    (
        "How is the weighted average cost of capital calculated?",
        "WACC weights the cost of equity and the after-tax cost of debt by their share of total capital, with the cost of equity often estimated using CAPM.",
    ),
    (
        "How does an increase in depreciation of 10 flow through the three statements?",
        "Operating income falls by 10 and net income by 10 times one minus the tax rate; cash flow rises by the tax savings because depreciation is added back, and the balance sheet shows lower PP&E balanced by lower retained earnings and higher cash.",
    ),
    (
        "What is duration and how does it relate to bond price risk?",
        "Duration measures the weighted average time to receive a bond's cash flows and approximates the percentage price change for a change in interest rates; higher duration means greater interest rate risk.",
    ),
    (
        "How would you value a company with negative earnings?",
        "Use revenue or user based multiples, a discounted cash flow with an explicit path to profitability, or comparable transactions, stressing assumptions with scenarios.",
    ),
    (
        "Explain how an LBO generates returns.",
        "A leveraged buyout funds a purchase largely with debt; returns come from paying down debt with cash flow, growing EBITDA and exiting at an equal or higher multiple.",
    ),
    (
        "What is the difference between enterprise value and equity value?",
        "Enterprise value is the value of the operating business to all capital providers, while equity value is enterprise value minus net debt and other claims such as preferred stock.",
    ),
    (
        "How do you hedge foreign exchange risk?",
        "Identify exposures, then use forwards, futures, options or swaps, or natural hedges such as matching revenue and costs in the same currency.",
    ),
    (
        "What is convexity in bond pricing?",
        "Convexity measures how duration changes as rates change; positive convexity means prices rise more when rates fall than they drop when rates rise.",
    ),
    (
        "How would you assess whether an acquisition is accretive or dilutive?",
        "Compare pro forma earnings per share of the combined company with the acquirer's standalone EPS, accounting for financing costs, synergies and new shares issued.",
    ),
];

const OPERATIONS_EASY: &[Entry] = &[
    (
        "What is a bottleneck in a process?",
        "A bottleneck is the step with the lowest capacity, which limits the throughput of the whole process.",
    ),
    (
        "What is inventory turnover?",
        "Inventory turnover is the cost of goods sold divided by average inventory and shows how often inventory is sold and replaced.",
    ),
    (
        "What is a key performance indicator?",
        "A key performance indicator is a measurable value that tracks how effectively a team or process achieves a business objective.",
    ),
    (
        "What does lead time mean?",
        "Lead time is the total time from placing an order or starting a request until it is delivered or completed.",
    ),
    (
        "What is throughput?",
        "Throughput is the number of units a process completes per unit of time.",
    ),
    (
        "What is a standard operating procedure?",
        "A standard operating procedure is a documented set of steps that describes how to perform a routine task consistently.",
    ),
    (
        "What is quality control?",
        "Quality control inspects and tests outputs to find defects and make sure products meet specifications.",
    ),
    (
        "What is the purpose of a Gantt chart?",
        "A Gantt chart shows project tasks on a timeline with their durations, dependencies and progress.",
    ),
    (
        "What is a supplier lead time and why does it matter?",
        "Supplier lead time is the time between placing an order and receiving it; it determines reorder points and how much inventory is needed.",
    ),
    (
        "What is cycle time?",
        "Cycle time is the time taken to complete one unit of work from start to finish within a process step.",
    ),
];

const OPERATIONS_MEDIUM: &[Entry] = &[
    (
        "Explain the principles of lean manufacturing.",
        "Lean focuses on maximizing customer value by eliminating waste, mapping the value stream, creating flow, using pull systems and pursuing continuous improvement.",
    ),
    (
        "What is safety stock and how is it determined?",
        "Safety stock is extra inventory held to buffer demand and supply variability, sized from demand variability, lead time and the target service level.",
    ),
    (
        "What is Little's Law?",
        "Little's Law states that average work in progress equals throughput multiplied by average flow time.",
    ),
    (
        "What is the difference between capacity and utilization?",
        "Capacity is the maximum output a resource can produce, while utilization is the share of that capacity actually used.",
    ),
    (
        "What is a reorder point?",
        "The reorder point is the inventory level that triggers a new order, equal to demand during lead time plus safety stock.",
    ),
    (
        "What is the difference between push and pull production?",
        "Push production builds to a forecast and pushes inventory downstream, while pull production starts work only when downstream demand signals it.",
    ),
    (
        "What is a root cause analysis?",
        "Root cause analysis identifies the underlying reason for a problem using tools such as the five whys or fishbone diagrams, so the fix prevents recurrence.",
    ),
    (
        "What is overall equipment effectiveness?",
        "Overall equipment effectiveness multiplies availability, performance and quality to show what share of planned production time is truly productive.",
    ),
    (
        "What is ABC inventory classification?",
        "ABC classification ranks items by annual consumption value so that A items get tight control, B items moderate control and C items simple control.",
    ),
    (
        "How do you balance a production line?",
        "Assign tasks to stations so that station workloads are close to the takt time, minimizing idle time and removing bottlenecks.",
    ),
];

const OPERATIONS_HARD: &[Entry] = &[
    (
        "How would you calculate an economic order quantity and what are its assumptions?",
        "EOQ is the square root of two times annual demand times ordering cost divided by holding cost; it assumes constant known demand, fixed ordering and holding costs and instant replenishment.",
    ),
    (
        "Explain the bullwhip effect and how to reduce it.",
        "The bullwhip effect is demand variability amplifying upstream in a supply chain; reduce it by sharing demand information, shortening lead times, smaller batches and stable pricing.",
    ),
    (
        "How does the theory of constraints guide process improvement?",
        "Identify the constraint, exploit it, subordinate everything else to it, elevate its capacity, and repeat once the constraint moves.",
    ),
    (
        "How would you apply Six Sigma DMAIC to reduce defects?",
        "Define the problem and goals, measure the current defect rate, analyze root causes, improve the process with tested changes, and control it with monitoring and standard work.",
    ),
    (
        "How would you design a capacity plan for uncertain demand?",
        "Forecast demand scenarios, compare them with capacity, then choose a mix of lead, lag or match strategies with flexible resources, buffers and trigger points for expansion.",
    ),
    (
        "How do you choose between centralized and decentralized warehouses?",
        "Trade off inventory pooling and lower safety stock from centralization against shorter delivery times and lower transport risk from decentralization, using total landed cost and service targets.",
    ),
    (
        "Explain queueing theory's impact on service design.",
        "Queueing theory shows waiting time grows sharply as utilization approaches one, so service design keeps utilization below saturation, reduces variability and adds servers or pooling.",
    ),
    (
        "How would you run a make versus buy analysis?",
        "Compare total cost of in house production with outsourcing, including capacity, quality, risk, strategic importance and supplier dependence, not just unit price.",
    ),
    (
        "How do you implement a sales and operations planning process?",
        "Run a monthly cycle that reviews demand, supply and finance plans, reconciles gaps in a cross functional meeting and produces one agreed operating plan.",
    ),
    (
        "How would you reduce the total cost of a supply chain without hurting service?",
        "Map end to end costs, then optimize network design, consolidate shipments, improve forecast accuracy, tune inventory policies and renegotiate supplier terms while tracking service levels.",
    ),
];

/// Deterministic generator backed by a fixed set of questions
#[derive(Debug, Default, Clone, Copy)]
pub struct QuestionBank;

impl QuestionBank {
    pub fn new() -> Self {
        Self
    }

    /// Questions for a domain at a given difficulty
    fn tier(domain: Domain, difficulty: Difficulty) -> &'static [Entry] {
        let level = difficulty.value();
        match (domain, level) {
            (Domain::DataAnalysis, 0..=3) => DATA_ANALYSIS_EASY,
            (Domain::DataAnalysis, 4..=6) => DATA_ANALYSIS_MEDIUM,
            (Domain::DataAnalysis, _) => DATA_ANALYSIS_HARD,
            (Domain::Finance, 0..=3) => FINANCE_EASY,
            (Domain::Finance, 4..=6) => FINANCE_MEDIUM,
            (Domain::Finance, _) => FINANCE_HARD,
            (Domain::Operations, 0..=3) => OPERATIONS_EASY,
            (Domain::Operations, 4..=6) => OPERATIONS_MEDIUM,
            (Domain::Operations, _) => OPERATIONS_HARD,
        }
    }

    /// Pick a question; identical requests always give the same question
    ///
    /// The opening request carries `num_asked = 0` and later ones the
    /// already counted round (2, 3, ..), so rounds map to slots 0..MAX_ROUNDS.
    pub fn pick(&self, request: QuestionRequest) -> GeneratedQuestion {
        let tier = Self::tier(request.domain, request.difficulty);
        let round = request.num_asked.max(1) as usize;
        let index = (round - 1) % tier.len();
        let (question, answer) = tier[index];
        GeneratedQuestion {
            question: question.to_string(),
            reference_answer: answer.to_string(),
        }
    }
}

#[async_trait]
impl QuestionGenerator for QuestionBank {
    async fn generate(&self, request: QuestionRequest) -> Result<GeneratedQuestion, CollaboratorError> {
        Ok(self.pick(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(domain: Domain, difficulty: u8, asked: u32) -> QuestionRequest {
        QuestionRequest {
            domain,
            difficulty: Difficulty::clamped(difficulty as i64),
            num_asked: asked,
            num_correct: 0,
            num_wrong: 0,
        }
    }

    #[test]
    fn pick_is_deterministic() {
        let bank = QuestionBank::new();
        let req = request(Domain::Finance, 5, 3);
        assert_eq!(bank.pick(req), bank.pick(req));
    }

    #[test]
    fn difficulty_selects_tier() {
        let bank = QuestionBank::new();

        let easy = bank.pick(request(Domain::Finance, 1, 0));
        let hard = bank.pick(request(Domain::Finance, 9, 0));

        assert!(FINANCE_EASY.iter().any(|(q, _)| *q == easy.question));
        assert!(FINANCE_HARD.iter().any(|(q, _)| *q == hard.question));
    }

    #[test]
    fn tiers_cover_a_full_interview() {
        for domain in Domain::ALL {
            for level in [0, 5, 10] {
                let tier = QuestionBank::tier(domain, Difficulty::clamped(level));
                assert!(tier.len() >= MAX_ROUNDS as usize, "{domain} level {level}");
            }
        }
    }

    #[test]
    fn a_full_interview_never_repeats_a_question() {
        use std::collections::HashSet;

        let bank = QuestionBank::new();
        for domain in Domain::ALL {
            // difficulty wanders across tier boundaries as it would in a session
            let levels = [5, 4, 3, 4, 3, 4, 5, 6, 7, 6];
            let asked = std::iter::once(0).chain(2..=MAX_ROUNDS);

            let questions: HashSet<String> = asked
                .zip(levels)
                .map(|(n, level)| bank.pick(request(domain, level, n)).question)
                .collect();

            assert_eq!(questions.len(), MAX_ROUNDS as usize, "{domain}");
        }
    }

    #[test]
    fn every_domain_and_level_has_questions() {
        let bank = QuestionBank::new();
        for domain in Domain::ALL {
            for level in 0..=10 {
                let question = bank.pick(request(domain, level, 0));
                assert!(!question.question.is_empty());
                assert!(!question.reference_answer.is_empty());
            }
        }
    }

    #[tokio::test]
    async fn generate_never_fails() {
        let bank = QuestionBank::new();
        let result = bank.generate(QuestionRequest::opening(Domain::DataAnalysis)).await;
        assert!(result.is_ok());
    }
}
