//! Page layout: turns a [`Portfolio`] into styled lines for a given width.
//!
//! Layout happens once per terminal width. Scrolling only changes which
//! slice of lines is drawn, so the page never re-wraps while the title
//! cycler is running.

use super::model::Portfolio;
use crate::buffer::{Buffer, Modifiers, Rgb, Style};
use crate::layout::{wrap, Rect};
use chrono::Datelike;
use unicode_width::UnicodeWidthStr;

/// Colors used by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Page background.
    pub background: Rgb,
    /// Body text.
    pub text: Rgb,
    /// Secondary text (dates, locations, tags).
    pub muted: Rgb,
    /// Headings, bullets and the title cursor.
    pub accent: Rgb,
    /// Names and roles.
    pub strong: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgb::from_u32(0x0F_17_2A),
            text: Rgb::from_u32(0xCB_D5_E1),
            muted: Rgb::from_u32(0x64_74_8B),
            accent: Rgb::from_u32(0x0E_A5_E9),
            strong: Rgb::from_u32(0xF8_FA_FC),
        }
    }
}

impl Theme {
    /// Style for body text.
    pub const fn body(&self) -> Style {
        Style::new(self.text, self.background)
    }

    /// Style for secondary text.
    pub const fn muted(&self) -> Style {
        Style::new(self.muted, self.background)
    }

    /// Style for accented text.
    pub const fn accent(&self) -> Style {
        Style::new(self.accent, self.background)
    }

    /// Style for section headings.
    pub const fn heading(&self) -> Style {
        Style::new(self.accent, self.background).with_modifiers(Modifiers::BOLD)
    }

    /// Style for emphasized text.
    pub const fn strong(&self) -> Style {
        Style::new(self.strong, self.background).with_modifiers(Modifiers::BOLD)
    }
}

/// Page sections, in page order. Each one is a jump target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Name and rotating title.
    Hero,
    /// Work history.
    Experience,
    /// Talks and community roles.
    Speaking,
    /// Skill groups.
    Skills,
    /// Projects.
    Work,
    /// Summary.
    About,
    /// Email and links.
    Contact,
}

impl Section {
    /// All sections in page order.
    pub const ALL: [Self; 7] = [
        Self::Hero,
        Self::Experience,
        Self::Speaking,
        Self::Skills,
        Self::Work,
        Self::About,
        Self::Contact,
    ];

    /// Anchor name.
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Experience => "experience",
            Self::Speaking => "speaking",
            Self::Skills => "skills",
            Self::Work => "work",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }

    /// Section bound to a digit key (`1` is the hero).
    pub fn from_digit(c: char) -> Option<Self> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    const fn index(self) -> usize {
        self as usize
    }

    const fn heading(self) -> &'static str {
        match self {
            Self::Hero => "",
            Self::Experience => "Experience",
            Self::Speaking => "Public Speaking & Community",
            Self::Skills => "Skills",
            Self::Work => "Selected Work",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }
}

/// A run of text in a single style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Text of the run.
    pub text: String,
    /// Style of the run.
    pub style: Style,
}

impl Span {
    fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// One laid-out row of the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    /// Styled runs, left to right.
    pub spans: Vec<Span>,
    /// Center the line in the content column.
    pub centered: bool,
}

impl Line {
    /// Display width in columns.
    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| s.text.width()).sum()
    }

    /// Plain text of the line.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// A portfolio laid out for one terminal width.
#[derive(Debug, Clone)]
pub struct Page {
    lines: Vec<Line>,
    anchors: [usize; Section::ALL.len()],
    title_row: usize,
    width: u16,
    margin: u16,
    theme: Theme,
}

impl Page {
    /// Lay out `portfolio` for a terminal `width` columns wide.
    pub fn layout(portfolio: &Portfolio, width: u16, theme: Theme) -> Self {
        Self::layout_for_year(portfolio, width, theme, chrono::Local::now().year())
    }

    /// Like [`layout`](Self::layout), with the footer copyright year fixed.
    pub fn layout_for_year(portfolio: &Portfolio, width: u16, theme: Theme, year: i32) -> Self {
        let margin = if width >= 24 { 2 } else { 0 };
        let mut builder = Builder {
            lines: Vec::new(),
            content_width: width.saturating_sub(margin * 2).max(1),
            theme,
        };
        let mut anchors = [0; Section::ALL.len()];

        anchors[Section::Hero.index()] = builder.lines.len();
        let title_row = builder.hero(portfolio);

        for section in &Section::ALL[1..] {
            builder.blank();
            anchors[section.index()] = builder.lines.len();
            builder.heading(*section);
            match section {
                Section::Experience => builder.experience(portfolio),
                Section::Speaking => builder.speaking(portfolio),
                Section::Skills => builder.skills(portfolio),
                Section::Work => builder.work(portfolio),
                Section::About => builder.paragraph(&portfolio.summary, 0, theme.body()),
                Section::Contact => builder.contact(portfolio),
                Section::Hero => {}
            }
        }
        builder.blank();
        builder.centered(
            &format!("© {year} {}", portfolio.personal_info.name),
            theme.muted(),
        );
        builder.blank();

        Self {
            lines: builder.lines,
            anchors,
            title_row,
            width,
            margin,
            theme,
        }
    }

    /// All laid-out lines.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the page has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Width the page was laid out for.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Line offset of a section heading.
    pub const fn anchor(&self, section: Section) -> usize {
        self.anchors[section.index()]
    }

    /// Line reserved for the rotating title.
    pub const fn title_row(&self) -> usize {
        self.title_row
    }

    /// Largest useful scroll offset for a viewport `height` rows tall.
    pub fn max_scroll(&self, height: u16) -> usize {
        self.lines.len().saturating_sub(usize::from(height))
    }

    /// Where the title widget goes when the page is scrolled to `scroll`
    /// inside `viewport`. Empty when the title row is off screen.
    pub fn title_bounds(&self, viewport: Rect, scroll: usize) -> Rect {
        let Some(row) = self.title_row.checked_sub(scroll) else {
            return Rect::ZERO;
        };
        match u16::try_from(row) {
            Ok(row) if row < viewport.height => {
                Rect::new(viewport.x, viewport.y + row, viewport.width, 1).inset_x(self.margin)
            }
            _ => Rect::ZERO,
        }
    }

    /// Draw the visible slice of the page into `buffer`.
    pub fn render(&self, buffer: &mut Buffer, viewport: Rect, scroll: usize) {
        buffer.fill_rect(viewport, self.theme.body());
        let content = viewport.inset_x(self.margin);
        if content.is_empty() {
            return;
        }

        for (row, line) in self.lines.iter().skip(scroll).take(usize::from(viewport.height)).enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let y = content.y + row as u16;
            let line_width = u16::try_from(line.width()).unwrap_or(u16::MAX);
            let mut x = if line.centered {
                content.x + content.width.saturating_sub(line_width) / 2
            } else {
                content.x
            };
            for span in &line.spans {
                let room = content.right().saturating_sub(x);
                if room == 0 {
                    break;
                }
                x += buffer.set_str(x, y, &span.text, span.style, room);
            }
        }
    }
}

struct Builder {
    lines: Vec<Line>,
    content_width: u16,
    theme: Theme,
}

impl Builder {
    fn push(&mut self, spans: Vec<Span>, centered: bool) {
        self.lines.push(Line { spans, centered });
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Push `spans` as one row when it fits, otherwise wrap each span
    /// onto its own lines with continuation spans indented.
    fn row(&mut self, spans: Vec<Span>) {
        let line = Line { spans, centered: false };
        if line.width() <= usize::from(self.content_width) {
            self.lines.push(line);
            return;
        }
        let mut indent = 0;
        for span in line.spans {
            let text = span.text.trim();
            if text.is_empty() {
                continue;
            }
            self.paragraph(text, indent, span.style);
            indent = 2;
        }
    }

    fn heading(&mut self, section: Section) {
        let title = section.heading();
        self.paragraph(title, 0, self.theme.heading());
        let rule = "─".repeat(title.width().min(usize::from(self.content_width)));
        self.push(vec![Span::new(rule, self.theme.accent())], false);
    }

    /// Wrap `text` into lines indented by `indent` columns.
    fn paragraph(&mut self, text: &str, indent: u16, style: Style) {
        let indent = indent.min(self.content_width / 2);
        let pad = " ".repeat(usize::from(indent));
        for piece in wrap(text, self.content_width.saturating_sub(indent)) {
            self.push(vec![Span::new(format!("{pad}{piece}"), style)], false);
        }
    }

    fn centered(&mut self, text: &str, style: Style) {
        for piece in wrap(text, self.content_width) {
            self.push(vec![Span::new(piece, style)], true);
        }
    }

    /// Bulleted item with a hanging indent.
    fn bullet(&mut self, text: &str) {
        let body = self.theme.body();
        let mut pieces = wrap(text, self.content_width.saturating_sub(4)).into_iter();
        if let Some(first) = pieces.next() {
            self.push(
                vec![Span::new("  • ", self.theme.accent()), Span::new(first, body)],
                false,
            );
        }
        for piece in pieces {
            self.push(vec![Span::new(format!("    {piece}"), body)], false);
        }
    }

    /// Returns the row reserved for the title.
    fn hero(&mut self, portfolio: &Portfolio) -> usize {
        let info = &portfolio.personal_info;
        self.blank();
        self.centered(&info.name, self.theme.strong());
        let title_row = self.lines.len();
        self.blank();
        if let Some(tagline) = &info.tagline {
            self.blank();
            self.centered(tagline, self.theme.body());
        }
        self.centered(&format!("⌖ {}", info.location), self.theme.muted());
        title_row
    }

    fn experience(&mut self, portfolio: &Portfolio) {
        for (i, job) in portfolio.experience.iter().enumerate() {
            if i > 0 {
                self.blank();
            }
            self.row(vec![
                Span::new(job.role.clone(), self.theme.strong()),
                Span::new(format!(" @ {}", job.company), self.theme.accent()),
            ]);
            self.paragraph(&format!("{} · {}", job.period, job.location), 0, self.theme.muted());
            for achievement in &job.achievements {
                self.bullet(achievement);
            }
        }
    }

    fn speaking(&mut self, portfolio: &Portfolio) {
        let Some(speaking) = &portfolio.speaking else {
            self.paragraph("No talks listed yet.", 0, self.theme.muted());
            return;
        };
        self.paragraph(&speaking.headline, 0, self.theme.strong());
        self.paragraph(&speaking.summary, 0, self.theme.body());
        if !speaking.highlights.is_empty() {
            self.paragraph(&speaking.highlights.join(" · "), 0, self.theme.muted());
        }
        if speaking.leadership.is_empty() {
            return;
        }
        self.blank();
        let title = speaking.leadership_title.as_deref().unwrap_or("Leadership & Community");
        self.paragraph(title, 0, self.theme.accent());
        for position in &speaking.leadership {
            self.row(vec![
                Span::new(position.role.clone(), self.theme.strong()),
                Span::new(format!(" · {}", position.organization), self.theme.muted()),
            ]);
            if !position.description.is_empty() {
                self.paragraph(&position.description, 2, self.theme.body());
            }
        }
    }

    fn skills(&mut self, portfolio: &Portfolio) {
        for group in &portfolio.skills {
            self.paragraph(&group.category, 0, self.theme.strong());
            self.paragraph(&group.items.join(" · "), 2, self.theme.body());
        }
    }

    fn work(&mut self, portfolio: &Portfolio) {
        if portfolio.projects.is_empty() {
            self.paragraph("More coming soon.", 0, self.theme.muted());
            return;
        }
        for (i, project) in portfolio.projects.iter().enumerate() {
            if i > 0 {
                self.blank();
            }
            self.paragraph(&project.title, 0, self.theme.strong());
            self.paragraph(&project.description, 2, self.theme.body());
            if !project.tags.is_empty() {
                let tags: Vec<String> = project.tags.iter().map(|t| format!("#{t}")).collect();
                self.paragraph(&tags.join(" "), 2, self.theme.muted());
            }
            if let Some(link) = &project.link {
                self.paragraph(&format!("→ {link}"), 2, self.theme.accent());
            }
        }
    }

    fn contact(&mut self, portfolio: &Portfolio) {
        if let Some(email) = &portfolio.personal_info.email {
            self.row(vec![
                Span::new("Email  ", self.theme.muted()),
                Span::new(email.clone(), self.theme.accent()),
            ]);
        }
        for link in &portfolio.links {
            self.row(vec![
                Span::new(format!("{}  ", link.label), self.theme.muted()),
                Span::new(link.url.clone(), self.theme.accent()),
            ]);
        }
        self.blank();
        self.centered("q quit · j/k scroll · 1-7 jump", self.theme.muted());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::Link;

    fn portfolio() -> Portfolio {
        serde_json::from_str(
            r#"{
                "personalInfo": {
                    "name": "Ada Example",
                    "title": "Engineer | Speaker",
                    "location": "Paris",
                    "email": "ada@example.com",
                    "tagline": "Turning data into decisions"
                },
                "summary": "A long summary that will need to wrap across several lines of the page.",
                "experience": [
                    {
                        "role": "Lead",
                        "company": "Acme",
                        "location": "Remote",
                        "period": "2021 - Present",
                        "achievements": ["Shipped the thing", "Scaled the other thing"]
                    }
                ],
                "speaking": {
                    "headline": "Communicating AI to the World",
                    "summary": "Talks on making machine learning understandable.",
                    "highlights": ["Technical Storytelling", "Conference Speaker"],
                    "leadershipTitle": "Leadership & Toastmasters",
                    "leadership": [
                        {
                            "role": "VP Education",
                            "organization": "City of London Toastmasters Club",
                            "description": "Runs the education programme."
                        }
                    ]
                },
                "skills": { "Programming": ["Python", "Rust"], "Cloud": ["GCP"] },
                "links": [ { "label": "GitHub", "url": "https://github.com/ada" } ]
            }"#,
        )
        .unwrap()
    }

    fn content_width(width: u16) -> usize {
        usize::from(if width >= 24 { width - 4 } else { width })
    }

    fn find(page: &Page, needle: &str) -> Option<usize> {
        page.lines().iter().position(|l| l.text().contains(needle))
    }

    #[test]
    fn test_anchors_in_page_order() {
        let page = Page::layout(&portfolio(), 80, Theme::default());
        let offsets: Vec<usize> = Section::ALL.iter().map(|s| page.anchor(*s)).collect();
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(page.anchor(Section::Hero), 0);
        assert_eq!(page.lines()[page.anchor(Section::Skills)].text(), "Skills");
        assert_eq!(
            page.lines()[page.anchor(Section::Speaking)].text(),
            "Public Speaking & Community"
        );
        assert_eq!(page.lines()[page.anchor(Section::Contact)].text(), "Contact");
    }

    #[test]
    fn test_title_row_follows_name() {
        let page = Page::layout(&portfolio(), 80, Theme::default());
        let name_row = find(&page, "Ada Example").unwrap();
        assert_eq!(page.title_row(), name_row + 1);
        assert!(page.lines()[page.title_row()].spans.is_empty());
    }

    #[test]
    fn test_lines_fit_width() {
        let mut portfolio = portfolio();
        portfolio.links.push(Link {
            label: "Portfolio".to_string(),
            url: "https://example.com/a/very/long/path/to/the/portfolio".to_string(),
        });
        for width in [12u16, 20, 23, 40, 80] {
            let page = Page::layout(&portfolio, width, Theme::default());
            for line in page.lines() {
                assert!(
                    line.width() <= content_width(width),
                    "{:?} is wider than {width}",
                    line.text()
                );
            }
        }
    }

    #[test]
    fn test_narrow_rows_split() {
        let page = Page::layout(&portfolio(), 20, Theme::default());
        let email = find(&page, "Email").unwrap();
        assert_eq!(page.lines()[email].text(), "Email");
        assert_eq!(page.lines()[email + 1].text(), "  ada@example.com");

        let role = find(&page, "VP Education").unwrap();
        assert_eq!(page.lines()[role].text(), "VP Education");
        assert!(page.lines()[role + 1].text().starts_with("  · City"));

        // Rows that fit stay on one line.
        let page = Page::layout(&portfolio(), 80, Theme::default());
        assert!(find(&page, "Email  ada@example.com").is_some());
        assert!(find(&page, "GitHub  https://github.com/ada").is_some());
    }

    #[test]
    fn test_speaking_section() {
        let page = Page::layout(&portfolio(), 80, Theme::default());
        let start = page.anchor(Section::Speaking);
        let headline = find(&page, "Communicating AI to the World").unwrap();
        let leadership = find(&page, "Leadership & Toastmasters").unwrap();
        assert!(start < headline && headline < leadership);
        assert!(leadership < page.anchor(Section::Skills));
        assert!(find(&page, "Technical Storytelling · Conference Speaker").is_some());
        assert!(find(&page, "VP Education · City of London Toastmasters Club").is_some());

        let mut bare = portfolio();
        bare.speaking = None;
        let page = Page::layout(&bare, 80, Theme::default());
        assert_eq!(
            page.lines()[page.anchor(Section::Speaking) + 2].text(),
            "No talks listed yet."
        );
    }

    #[test]
    fn test_footer_copyright() {
        let page = Page::layout_for_year(&portfolio(), 80, Theme::default(), 2026);
        let footer = find(&page, "©").unwrap();
        assert_eq!(page.lines()[footer].text(), "© 2026 Ada Example");
        assert!(page.lines()[footer].centered);
        assert!(footer > page.anchor(Section::Contact));
        assert_eq!(footer, page.len() - 2);
    }

    #[test]
    fn test_skills_order_and_empty_work() {
        let page = Page::layout(&portfolio(), 80, Theme::default());
        assert!(find(&page, "Programming").unwrap() < find(&page, "Cloud").unwrap());
        assert!(find(&page, "Python · Rust").is_some());
        assert!(find(&page, "More coming soon.").is_some());
    }

    #[test]
    fn test_render_scrolled() {
        let page = Page::layout(&portfolio(), 40, Theme::default());
        let mut buffer = Buffer::new(40, 4);
        let viewport = buffer.area();
        let scroll = page.anchor(Section::Experience);
        page.render(&mut buffer, viewport, scroll);
        assert_eq!(buffer.row_text(0).trim_end(), "  Experience");
        assert!(buffer.row_text(2).contains("Lead @ Acme"));
    }

    #[test]
    fn test_title_bounds_visibility() {
        let page = Page::layout(&portfolio(), 40, Theme::default());
        let viewport = Rect::new(0, 0, 40, 10);
        let bounds = page.title_bounds(viewport, 0);
        #[allow(clippy::cast_possible_truncation)]
        let row = page.title_row() as u16;
        assert_eq!(bounds, Rect::new(2, row, 36, 1));

        // Scrolled past the title row.
        assert!(page.title_bounds(viewport, page.title_row() + 1).is_empty());
        assert_eq!(page.max_scroll(10), page.len() - 10);
    }

    #[test]
    fn test_section_digits() {
        assert_eq!(Section::from_digit('1'), Some(Section::Hero));
        assert_eq!(Section::from_digit('3'), Some(Section::Speaking));
        assert_eq!(Section::from_digit('7'), Some(Section::Contact));
        assert_eq!(Section::from_digit('0'), None);
        assert_eq!(Section::from_digit('8'), None);
        assert_eq!(Section::from_digit('x'), None);
        assert_eq!(Section::Work.anchor(), "work");
    }
}
