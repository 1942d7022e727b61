//! Panel data contract
//!
//! Types and mock providers for the metric/series data each panel renders.
//! Every provider is a pure, total function of the selected time range: the
//! widgets never aggregate anything themselves, they only display what the
//! provider pre-formatted.

pub mod feed;

use ratatui::style::Color;

// Brand palette shared by the chart encodings.
pub const PURPLE: Color = Color::Rgb(168, 85, 247);
pub const PINK: Color = Color::Rgb(236, 72, 153);
pub const CYAN: Color = Color::Rgb(6, 182, 212);
pub const BLUE: Color = Color::Rgb(59, 130, 246);
pub const GREEN: Color = Color::Rgb(16, 185, 129);
pub const AMBER: Color = Color::Rgb(245, 158, 11);
pub const RED: Color = Color::Rgb(239, 68, 68);
pub const GRAY: Color = Color::Rgb(107, 114, 128);

/// Time window the data source is asked for. Purely presentational: it never
/// changes which widgets render, only which window a live source would serve.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum TimeRange {
    #[strum(serialize = "Today")]
    Today,
    #[strum(serialize = "7 Days")]
    SevenDays,
    #[strum(serialize = "30 Days")]
    ThirtyDays,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [
        TimeRange::Today,
        TimeRange::SevenDays,
        TimeRange::ThirtyDays,
    ];

    pub fn next(self) -> Self {
        match self {
            TimeRange::Today => TimeRange::SevenDays,
            TimeRange::SevenDays => TimeRange::ThirtyDays,
            TimeRange::ThirtyDays => TimeRange::Today,
        }
    }
}

/// Icon shown in the corner of a metric card.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum IconTag {
    Phone,
    Zap,
    Clock,
    Dollar,
    Calendar,
    Message,
    Star,
    Card,
    Cpu,
    TrendingUp,
    TrendingDown,
    Alert,
    Activity,
}

impl IconTag {
    pub fn glyph(self) -> &'static str {
        match self {
            IconTag::Phone => "☎",
            IconTag::Zap => "⚡",
            IconTag::Clock => "◷",
            IconTag::Dollar => "$",
            IconTag::Calendar => "▦",
            IconTag::Message => "✉",
            IconTag::Star => "★",
            IconTag::Card => "▤",
            IconTag::Cpu => "⚙",
            IconTag::TrendingUp => "↗",
            IconTag::TrendingDown => "↘",
            IconTag::Alert => "⚠",
            IconTag::Activity => "∿",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TrendDirection {
    Up,
    Down,
}

/// Period-over-period change badge for a metric card.
#[derive(Debug, Clone)]
pub struct Trend {
    pub delta: String,
    pub direction: TrendDirection,
}

/// One scalar KPI, pre-formatted by the data source. Immutable once built.
#[derive(Debug, Clone)]
pub struct MetricDatum {
    pub icon: IconTag,
    pub title: String,
    pub value: String,
    pub subtext: String,
    pub trend: Trend,
}

impl MetricDatum {
    pub fn new(
        icon: IconTag,
        title: &str,
        value: &str,
        subtext: &str,
        delta: &str,
        direction: TrendDirection,
    ) -> Self {
        Self {
            icon,
            title: title.to_string(),
            value: value.to_string(),
            subtext: subtext.to_string(),
            trend: Trend {
                delta: delta.to_string(),
                direction,
            },
        }
    }
}

/// One categorical or ordinal sample: a label plus named numeric fields.
#[derive(Debug, Clone)]
pub struct SeriesPoint {
    pub label: String,
    values: Vec<(&'static str, f64)>,
}

impl SeriesPoint {
    pub fn new(label: &str, values: &[(&'static str, f64)]) -> Self {
        Self {
            label: label.to_string(),
            values: values.to_vec(),
        }
    }

    /// Look up a named field. `None` when the source omitted it; the chart
    /// widget treats that as zero rather than dropping the point.
    pub fn value(&self, field: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, v)| *v)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ChartKind {
    Bar,
    Line,
    Area,
    Donut,
}

/// Maps one named field of each point to a visual channel.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub field: &'static str,
    pub label: &'static str,
    pub color: Color,
}

impl FieldSpec {
    pub const fn new(field: &'static str, label: &'static str, color: Color) -> Self {
        Self { field, label, color }
    }
}

/// Declarative chart description: what to plot and how.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub title: &'static str,
    pub kind: ChartKind,
    pub fields: Vec<FieldSpec>,
}

impl ChartSpec {
    pub fn new(title: &'static str, kind: ChartKind, fields: Vec<FieldSpec>) -> Self {
        Self { title, kind, fields }
    }
}

/// A chart spec together with the ordered points it plots.
#[derive(Debug, Clone)]
pub struct SeriesBlock {
    pub spec: ChartSpec,
    pub points: Vec<SeriesPoint>,
}

/// Everything a panel needs for one render cycle.
#[derive(Debug, Clone)]
pub struct PanelData {
    pub metrics: Vec<MetricDatum>,
    pub series: Vec<SeriesBlock>,
}

// =============================================================================
// PANEL PROVIDERS
// =============================================================================
// The mock source serves the same window for every range (a live source
// would honor `_range`); the range still flows through every call so the
// contract holds once real data is wired in.

/// KPI overview plus the headline call charts for the main dashboard view.
pub fn overview(_range: TimeRange) -> PanelData {
    let metrics = vec![
        MetricDatum::new(
            IconTag::Phone,
            "Total Calls",
            "1,234",
            "vs last period",
            "12%",
            TrendDirection::Up,
        ),
        MetricDatum::new(
            IconTag::Zap,
            "AI Success Rate",
            "89%",
            "automated handling",
            "4%",
            TrendDirection::Up,
        ),
        MetricDatum::new(
            IconTag::Clock,
            "Avg Resolution",
            "2.3 min",
            "per interaction",
            "8%",
            TrendDirection::Down,
        ),
        MetricDatum::new(
            IconTag::Dollar,
            "Cost Savings",
            "$1,240",
            "this month",
            "15%",
            TrendDirection::Up,
        ),
    ];

    let calls_by_day = SeriesBlock {
        spec: ChartSpec::new(
            "Calls by Day",
            ChartKind::Bar,
            vec![
                FieldSpec::new("total", "Total Calls", PURPLE),
                FieldSpec::new("ai_handled", "AI Handled", PINK),
            ],
        ),
        points: vec![
            SeriesPoint::new("Mon", &[("total", 156.0), ("ai_handled", 142.0)]),
            SeriesPoint::new("Tue", &[("total", 189.0), ("ai_handled", 168.0)]),
            SeriesPoint::new("Wed", &[("total", 178.0), ("ai_handled", 158.0)]),
            SeriesPoint::new("Thu", &[("total", 203.0), ("ai_handled", 185.0)]),
            SeriesPoint::new("Fri", &[("total", 234.0), ("ai_handled", 208.0)]),
            SeriesPoint::new("Sat", &[("total", 98.0), ("ai_handled", 87.0)]),
            SeriesPoint::new("Sun", &[("total", 76.0), ("ai_handled", 68.0)]),
        ],
    };

    let call_outcomes = SeriesBlock {
        spec: ChartSpec::new(
            "Call Outcomes",
            ChartKind::Donut,
            vec![FieldSpec::new("share", "Share", PURPLE)],
        ),
        points: vec![
            SeriesPoint::new("Handled by AI", &[("share", 89.0)]),
            SeriesPoint::new("Forwarded to Staff", &[("share", 8.0)]),
            SeriesPoint::new("Missed → Texted", &[("share", 3.0)]),
        ],
    };

    PanelData {
        metrics,
        series: vec![calls_by_day, call_outcomes],
    }
}

/// Call and chat volumes plus response-time trends.
pub fn calls_chat(_range: TimeRange) -> PanelData {
    let metrics = vec![
        MetricDatum::new(
            IconTag::Phone,
            "Total Calls",
            "1,247",
            "this week",
            "12%",
            TrendDirection::Up,
        ),
        MetricDatum::new(
            IconTag::Message,
            "Chat Sessions",
            "892",
            "active conversations",
            "8%",
            TrendDirection::Up,
        ),
        MetricDatum::new(
            IconTag::Clock,
            "Avg Response Time",
            "2.1 min",
            "for chat",
            "0.3 min",
            TrendDirection::Down,
        ),
        MetricDatum::new(
            IconTag::Star,
            "Customer Satisfaction",
            "4.7/5",
            "average rating",
            "0.2",
            TrendDirection::Up,
        ),
    ];

    let volume = SeriesBlock {
        spec: ChartSpec::new(
            "Call & Chat Volume",
            ChartKind::Bar,
            vec![
                FieldSpec::new("calls", "Calls", PURPLE),
                FieldSpec::new("chats", "Chats", CYAN),
            ],
        ),
        points: vec![
            SeriesPoint::new("9 AM", &[("calls", 12.0), ("chats", 8.0)]),
            SeriesPoint::new("10 AM", &[("calls", 25.0), ("chats", 15.0)]),
            SeriesPoint::new("11 AM", &[("calls", 35.0), ("chats", 22.0)]),
            SeriesPoint::new("12 PM", &[("calls", 42.0), ("chats", 28.0)]),
            SeriesPoint::new("1 PM", &[("calls", 38.0), ("chats", 31.0)]),
            SeriesPoint::new("2 PM", &[("calls", 45.0), ("chats", 33.0)]),
            SeriesPoint::new("3 PM", &[("calls", 32.0), ("chats", 25.0)]),
            SeriesPoint::new("4 PM", &[("calls", 28.0), ("chats", 19.0)]),
            SeriesPoint::new("5 PM", &[("calls", 18.0), ("chats", 12.0)]),
        ],
    };

    let response_times = SeriesBlock {
        spec: ChartSpec::new(
            "Response Time (min)",
            ChartKind::Line,
            vec![
                FieldSpec::new("calls", "Calls", PURPLE),
                FieldSpec::new("chats", "Chats", CYAN),
            ],
        ),
        points: vec![
            SeriesPoint::new("Mon", &[("calls", 2.3), ("chats", 1.8)]),
            SeriesPoint::new("Tue", &[("calls", 2.1), ("chats", 2.1)]),
            SeriesPoint::new("Wed", &[("calls", 2.4), ("chats", 1.9)]),
            SeriesPoint::new("Thu", &[("calls", 2.2), ("chats", 2.0)]),
            SeriesPoint::new("Fri", &[("calls", 2.0), ("chats", 2.2)]),
            SeriesPoint::new("Sat", &[("calls", 1.8), ("chats", 1.7)]),
            SeriesPoint::new("Sun", &[("calls", 1.9), ("chats", 1.8)]),
        ],
    };

    PanelData {
        metrics,
        series: vec![volume, response_times],
    }
}

/// Weekly appointment load and type mix.
pub fn appointments(_range: TimeRange) -> PanelData {
    let metrics = vec![
        MetricDatum::new(
            IconTag::Calendar,
            "Scheduled",
            "127",
            "this week",
            "15%",
            TrendDirection::Up,
        ),
        MetricDatum::new(
            IconTag::Zap,
            "Completed",
            "95",
            "74.8% completion rate",
            "5%",
            TrendDirection::Up,
        ),
        MetricDatum::new(
            IconTag::Alert,
            "No-Shows",
            "8",
            "6.3% no-show rate",
            "2%",
            TrendDirection::Down,
        ),
        MetricDatum::new(
            IconTag::Clock,
            "Avg Duration",
            "32 min",
            "per appointment",
            "3 min",
            TrendDirection::Up,
        ),
    ];

    let weekly = SeriesBlock {
        spec: ChartSpec::new(
            "Weekly Appointments",
            ChartKind::Bar,
            vec![
                FieldSpec::new("scheduled", "Scheduled", PURPLE),
                FieldSpec::new("completed", "Completed", CYAN),
                FieldSpec::new("no_show", "No-Show", AMBER),
            ],
        ),
        points: vec![
            SeriesPoint::new(
                "Mon",
                &[("scheduled", 22.0), ("completed", 18.0), ("no_show", 2.0)],
            ),
            SeriesPoint::new(
                "Tue",
                &[("scheduled", 25.0), ("completed", 20.0), ("no_show", 3.0)],
            ),
            SeriesPoint::new(
                "Wed",
                &[("scheduled", 28.0), ("completed", 24.0), ("no_show", 2.0)],
            ),
            SeriesPoint::new(
                "Thu",
                &[("scheduled", 24.0), ("completed", 19.0), ("no_show", 3.0)],
            ),
            SeriesPoint::new(
                "Fri",
                &[("scheduled", 26.0), ("completed", 22.0), ("no_show", 2.0)],
            ),
            SeriesPoint::new(
                "Sat",
                &[("scheduled", 12.0), ("completed", 10.0), ("no_show", 1.0)],
            ),
            SeriesPoint::new(
                "Sun",
                &[("scheduled", 8.0), ("completed", 7.0), ("no_show", 0.0)],
            ),
        ],
    };

    let types = SeriesBlock {
        spec: ChartSpec::new(
            "Appointment Types",
            ChartKind::Donut,
            vec![FieldSpec::new("share", "Share", PURPLE)],
        ),
        points: vec![
            SeriesPoint::new("Consultation", &[("share", 42.0)]),
            SeriesPoint::new("Follow-up", &[("share", 28.0)]),
            SeriesPoint::new("New Client", &[("share", 20.0)]),
            SeriesPoint::new("Emergency", &[("share", 10.0)]),
        ],
    };

    // Stage values are the retained share of the calls that came in.
    let funnel = SeriesBlock {
        spec: ChartSpec::new(
            "Booking Funnel",
            ChartKind::Donut,
            vec![FieldSpec::new("share", "Share", PURPLE)],
        ),
        points: vec![
            SeriesPoint::new("Calls", &[("share", 100.0)]),
            SeriesPoint::new("Booked", &[("share", 55.0)]),
            SeriesPoint::new("Confirmed", &[("share", 47.0)]),
            SeriesPoint::new("Arrived", &[("share", 45.0)]),
        ],
    };

    PanelData {
        metrics,
        series: vec![weekly, types, funnel],
    }
}

/// Rating distribution and sentiment mix for customer feedback.
pub fn feedback(_range: TimeRange) -> PanelData {
    let metrics = vec![
        MetricDatum::new(
            IconTag::Star,
            "Average Rating",
            "4.7/5",
            "from 234 reviews",
            "0.3",
            TrendDirection::Up,
        ),
        MetricDatum::new(
            IconTag::Message,
            "Total Reviews",
            "234",
            "this month",
            "18%",
            TrendDirection::Up,
        ),
        MetricDatum::new(
            IconTag::TrendingUp,
            "Satisfaction Rate",
            "92%",
            "positive feedback",
            "5%",
            TrendDirection::Up,
        ),
        MetricDatum::new(
            IconTag::Activity,
            "Response Rate",
            "87%",
            "customers responding",
            "12%",
            TrendDirection::Up,
        ),
    ];

    let ratings = SeriesBlock {
        spec: ChartSpec::new(
            "Rating Distribution",
            ChartKind::Bar,
            vec![FieldSpec::new("count", "Reviews", PURPLE)],
        ),
        points: vec![
            SeriesPoint::new("5★", &[("count", 142.0)]),
            SeriesPoint::new("4★", &[("count", 58.0)]),
            SeriesPoint::new("3★", &[("count", 21.0)]),
            SeriesPoint::new("2★", &[("count", 9.0)]),
            SeriesPoint::new("1★", &[("count", 4.0)]),
        ],
    };

    let sentiment = SeriesBlock {
        spec: ChartSpec::new(
            "Sentiment",
            ChartKind::Donut,
            vec![FieldSpec::new("share", "Share", GREEN)],
        ),
        points: vec![
            SeriesPoint::new("Very Positive", &[("share", 61.0)]),
            SeriesPoint::new("Positive", &[("share", 25.0)]),
            SeriesPoint::new("Neutral", &[("share", 9.0)]),
            SeriesPoint::new("Negative", &[("share", 4.0)]),
            SeriesPoint::new("Very Negative", &[("share", 1.0)]),
        ],
    };

    PanelData {
        metrics,
        series: vec![ratings, sentiment],
    }
}

/// Revenue growth and subscription mix.
pub fn billing(_range: TimeRange) -> PanelData {
    let metrics = vec![
        MetricDatum::new(
            IconTag::Dollar,
            "Monthly Revenue",
            "$24,750",
            "current month",
            "18%",
            TrendDirection::Up,
        ),
        MetricDatum::new(
            IconTag::Card,
            "Active Subscriptions",
            "147",
            "paying clients",
            "7%",
            TrendDirection::Up,
        ),
        MetricDatum::new(
            IconTag::TrendingUp,
            "Avg Revenue per User",
            "$168",
            "monthly ARPU",
            "12%",
            TrendDirection::Up,
        ),
        MetricDatum::new(
            IconTag::Alert,
            "Churn Rate",
            "2.3%",
            "monthly churn",
            "0.5%",
            TrendDirection::Down,
        ),
    ];

    let revenue = SeriesBlock {
        spec: ChartSpec::new(
            "Revenue Growth Trend",
            ChartKind::Line,
            vec![FieldSpec::new("revenue", "Revenue ($)", PURPLE)],
        ),
        points: vec![
            SeriesPoint::new("Jan", &[("revenue", 18500.0)]),
            SeriesPoint::new("Feb", &[("revenue", 19200.0)]),
            SeriesPoint::new("Mar", &[("revenue", 20100.0)]),
            SeriesPoint::new("Apr", &[("revenue", 21800.0)]),
            SeriesPoint::new("May", &[("revenue", 22900.0)]),
            SeriesPoint::new("Jun", &[("revenue", 24750.0)]),
        ],
    };

    let plans = SeriesBlock {
        spec: ChartSpec::new(
            "Plan Distribution",
            ChartKind::Donut,
            vec![FieldSpec::new("share", "Share", CYAN)],
        ),
        points: vec![
            SeriesPoint::new("Basic Plan $99/mo", &[("share", 45.0)]),
            SeriesPoint::new("Professional $199/mo", &[("share", 35.0)]),
            SeriesPoint::new("Enterprise $399/mo", &[("share", 15.0)]),
            SeriesPoint::new("Custom $999/mo", &[("share", 5.0)]),
        ],
    };

    PanelData {
        metrics,
        series: vec![revenue, plans],
    }
}

/// Month-over-month performance and hourly volume distribution.
pub fn analytics(_range: TimeRange) -> PanelData {
    let metrics = vec![
        MetricDatum::new(
            IconTag::Activity,
            "Total Interactions",
            "15,742",
            "this month",
            "23%",
            TrendDirection::Up,
        ),
        MetricDatum::new(
            IconTag::TrendingUp,
            "Growth Rate",
            "+45%",
            "month over month",
            "12%",
            TrendDirection::Up,
        ),
        MetricDatum::new(
            IconTag::Cpu,
            "Active Users",
            "2,341",
            "unique clients",
            "18%",
            TrendDirection::Up,
        ),
        MetricDatum::new(
            IconTag::Star,
            "Goal Achievement",
            "87%",
            "targets met",
            "5%",
            TrendDirection::Up,
        ),
    ];

    let performance = SeriesBlock {
        spec: ChartSpec::new(
            "Interactions by Month",
            ChartKind::Line,
            vec![FieldSpec::new("interactions", "Interactions", PURPLE)],
        ),
        points: vec![
            SeriesPoint::new("Jan", &[("interactions", 8420.0)]),
            SeriesPoint::new("Feb", &[("interactions", 9150.0)]),
            SeriesPoint::new("Mar", &[("interactions", 10200.0)]),
            SeriesPoint::new("Apr", &[("interactions", 11800.0)]),
            SeriesPoint::new("May", &[("interactions", 13500.0)]),
            SeriesPoint::new("Jun", &[("interactions", 15742.0)]),
        ],
    };

    let channels = SeriesBlock {
        spec: ChartSpec::new(
            "Channel Volume",
            ChartKind::Bar,
            vec![FieldSpec::new("volume", "Volume", PURPLE)],
        ),
        points: vec![
            SeriesPoint::new("Phone", &[("volume", 4200.0)]),
            SeriesPoint::new("Chat", &[("volume", 6800.0)]),
            SeriesPoint::new("Email", &[("volume", 2100.0)]),
            SeriesPoint::new("Social", &[("volume", 1500.0)]),
            SeriesPoint::new("App", &[("volume", 1142.0)]),
        ],
    };

    let hourly = SeriesBlock {
        spec: ChartSpec::new(
            "Hourly Volume",
            ChartKind::Area,
            vec![FieldSpec::new("volume", "Volume", CYAN)],
        ),
        points: vec![
            SeriesPoint::new("6 AM", &[("volume", 45.0)]),
            SeriesPoint::new("7 AM", &[("volume", 89.0)]),
            SeriesPoint::new("8 AM", &[("volume", 156.0)]),
            SeriesPoint::new("9 AM", &[("volume", 234.0)]),
            SeriesPoint::new("10 AM", &[("volume", 298.0)]),
            SeriesPoint::new("11 AM", &[("volume", 342.0)]),
            SeriesPoint::new("12 PM", &[("volume", 389.0)]),
            SeriesPoint::new("1 PM", &[("volume", 365.0)]),
            SeriesPoint::new("2 PM", &[("volume", 421.0)]),
            SeriesPoint::new("3 PM", &[("volume", 398.0)]),
            SeriesPoint::new("4 PM", &[("volume", 356.0)]),
            SeriesPoint::new("5 PM", &[("volume", 289.0)]),
            SeriesPoint::new("6 PM", &[("volume", 198.0)]),
            SeriesPoint::new("7 PM", &[("volume", 123.0)]),
            SeriesPoint::new("8 PM", &[("volume", 67.0)]),
        ],
    };

    let funnel = SeriesBlock {
        spec: ChartSpec::new(
            "Conversion Funnel",
            ChartKind::Donut,
            vec![FieldSpec::new("share", "Share", PURPLE)],
        ),
        points: vec![
            SeriesPoint::new("Initial Contact", &[("share", 100.0)]),
            SeriesPoint::new("Qualified Lead", &[("share", 75.0)]),
            SeriesPoint::new("Proposal Sent", &[("share", 58.0)]),
            SeriesPoint::new("Contract Signed", &[("share", 42.0)]),
            SeriesPoint::new("Onboarded", &[("share", 38.0)]),
        ],
    };

    PanelData {
        metrics,
        series: vec![performance, channels, hourly, funnel],
    }
}

// =============================================================================
// PANEL-SPECIFIC TABLE ROWS
// =============================================================================

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Failed,
    Overdue,
}

#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: &'static str,
    pub client: &'static str,
    pub plan: &'static str,
    pub amount: &'static str,
    pub date: &'static str,
    pub status: PaymentStatus,
}

pub fn recent_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "TXN-2024-1156",
            client: "Acme Corp",
            plan: "Enterprise",
            amount: "$399.00",
            date: "Nov 10, 2025",
            status: PaymentStatus::Paid,
        },
        Transaction {
            id: "TXN-2024-1155",
            client: "TechStart Inc",
            plan: "Professional",
            amount: "$199.00",
            date: "Nov 10, 2025",
            status: PaymentStatus::Paid,
        },
        Transaction {
            id: "TXN-2024-1154",
            client: "Digital Agency Co",
            plan: "Basic Plan",
            amount: "$99.00",
            date: "Nov 9, 2025",
            status: PaymentStatus::Pending,
        },
        Transaction {
            id: "TXN-2024-1153",
            client: "StartupXYZ",
            plan: "Professional",
            amount: "$199.00",
            date: "Nov 9, 2025",
            status: PaymentStatus::Failed,
        },
    ]
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum BookingStatus {
    Confirmed,
    Pending,
}

#[derive(Debug, Clone)]
pub struct UpcomingAppointment {
    pub time: &'static str,
    pub client: &'static str,
    pub kind: &'static str,
    pub duration: &'static str,
    pub status: BookingStatus,
}

pub fn upcoming_appointments() -> Vec<UpcomingAppointment> {
    vec![
        UpcomingAppointment {
            time: "3:00 PM",
            client: "John Smith",
            kind: "Consultation",
            duration: "45 min",
            status: BookingStatus::Confirmed,
        },
        UpcomingAppointment {
            time: "3:45 PM",
            client: "Lisa Johnson",
            kind: "Follow-up",
            duration: "30 min",
            status: BookingStatus::Confirmed,
        },
        UpcomingAppointment {
            time: "4:15 PM",
            client: "Michael Brown",
            kind: "New Client",
            duration: "60 min",
            status: BookingStatus::Pending,
        },
        UpcomingAppointment {
            time: "5:00 PM",
            client: "Sarah Davis",
            kind: "Consultation",
            duration: "45 min",
            status: BookingStatus::Confirmed,
        },
    ]
}

#[derive(Debug, Clone)]
pub struct FeedbackComment {
    pub name: &'static str,
    pub rating: u8,
    pub comment: &'static str,
    pub date: &'static str,
    pub category: &'static str,
}

pub fn recent_feedback() -> Vec<FeedbackComment> {
    vec![
        FeedbackComment {
            name: "Sarah Johnson",
            rating: 5,
            comment: "Excellent service! The AI assistant was very helpful and resolved my issue quickly.",
            date: "2 hours ago",
            category: "Service Quality",
        },
        FeedbackComment {
            name: "Mike Chen",
            rating: 4,
            comment: "Good experience overall. The response time could be improved slightly.",
            date: "5 hours ago",
            category: "Response Time",
        },
        FeedbackComment {
            name: "Emma Wilson",
            rating: 5,
            comment: "Amazing! The booking process was seamless and the staff was very professional.",
            date: "1 day ago",
            category: "Booking Experience",
        },
        FeedbackComment {
            name: "John Smith",
            rating: 3,
            comment: "Average experience. The service was okay but nothing exceptional.",
            date: "1 day ago",
            category: "General Experience",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn providers() -> Vec<fn(TimeRange) -> PanelData> {
        vec![overview, calls_chat, appointments, feedback, billing, analytics]
    }

    #[test]
    fn every_provider_is_total_over_all_ranges() {
        for provider in providers() {
            for range in TimeRange::ALL {
                let data = provider(range);
                assert!(!data.metrics.is_empty());
                assert!(!data.series.is_empty());
                for block in &data.series {
                    assert!(!block.spec.fields.is_empty());
                    // Every encoded field must resolve on every point.
                    if block.spec.kind != ChartKind::Donut {
                        for point in &block.points {
                            for field in &block.spec.fields {
                                assert!(
                                    point.value(field.field).is_some(),
                                    "{} missing {}",
                                    point.label,
                                    field.field
                                );
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn appointments_include_the_booking_funnel_stages() {
        let data = appointments(TimeRange::Today);
        let funnel = data
            .series
            .iter()
            .find(|block| block.spec.title == "Booking Funnel")
            .expect("booking funnel block");
        let stages: Vec<&str> = funnel.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(stages, ["Calls", "Booked", "Confirmed", "Arrived"]);
        assert_eq!(funnel.points[0].value("share"), Some(100.0));
    }

    #[test]
    fn analytics_include_channel_volume_and_conversion_funnel() {
        let data = analytics(TimeRange::Today);
        let titles: Vec<&str> = data.series.iter().map(|b| b.spec.title).collect();
        assert!(titles.contains(&"Channel Volume"));
        assert!(titles.contains(&"Conversion Funnel"));

        let funnel = data
            .series
            .iter()
            .find(|block| block.spec.title == "Conversion Funnel")
            .unwrap();
        // Stage shares shrink monotonically down the funnel.
        let shares: Vec<f64> = funnel
            .points
            .iter()
            .map(|p| p.value("share").unwrap())
            .collect();
        assert!(shares.windows(2).all(|pair| pair[1] <= pair[0]));
    }

    #[test]
    fn series_point_missing_field_is_none() {
        let point = SeriesPoint::new("Mon", &[("total", 156.0)]);
        assert_eq!(point.value("total"), Some(156.0));
        assert_eq!(point.value("ai_handled"), None);
    }

    #[test]
    fn time_range_cycles_through_all_variants() {
        let mut range = TimeRange::Today;
        for _ in 0..TimeRange::ALL.len() {
            range = range.next();
        }
        assert_eq!(range, TimeRange::Today);
    }
}
