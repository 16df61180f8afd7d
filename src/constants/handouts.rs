//! Handout catalog for the eight-week Microsoft Word certification prep course.
//!
//! Only topic outlines live here; the full classroom prose is distributed
//! separately.

use crate::models::domain::{Handout, HandoutSection};

pub const TOTAL_WEEKS: u8 = 8;

pub static HANDOUTS: [Handout; TOTAL_WEEKS as usize] = [
    Handout {
        week: 1,
        title: "Getting Started with Word",
        subtitle: "Interface, navigation and document management",
        sections: &[
            HandoutSection {
                heading: "The Word interface",
                points: &[
                    "Ribbon tabs, groups and dialog box launchers",
                    "Quick Access Toolbar customization",
                    "Backstage view and file properties",
                ],
            },
            HandoutSection {
                heading: "Working with documents",
                points: &[
                    "Create documents from blank and from templates",
                    "Save in .docx, .pdf and compatibility formats",
                    "Navigate with the Navigation pane, Go To and Find",
                ],
            },
            HandoutSection {
                heading: "Exam objectives",
                points: &["Manage documents", "Customize options and views"],
            },
        ],
    },
    Handout {
        week: 2,
        title: "Formatting Text and Paragraphs",
        subtitle: "Character formatting, paragraph layout and styles",
        sections: &[
            HandoutSection {
                heading: "Character formatting",
                points: &[
                    "Fonts, sizes, effects and text highlight",
                    "Format Painter and Clear All Formatting",
                ],
            },
            HandoutSection {
                heading: "Paragraph formatting",
                points: &[
                    "Alignment, indentation and line spacing",
                    "Tabs, leaders and the ruler",
                    "Borders and shading",
                ],
            },
            HandoutSection {
                heading: "Styles",
                points: &[
                    "Apply built-in styles",
                    "Modify and create styles from selection",
                ],
            },
        ],
    },
    Handout {
        week: 3,
        title: "Page Layout and Sections",
        subtitle: "Margins, orientation, columns and section breaks",
        sections: &[
            HandoutSection {
                heading: "Page setup",
                points: &[
                    "Margins, orientation and paper size",
                    "Page and section breaks",
                    "Columns and column breaks",
                ],
            },
            HandoutSection {
                heading: "Headers and footers",
                points: &[
                    "Page numbers and built-in header blocks",
                    "Different first page and odd/even pages",
                    "Unlinking headers between sections",
                ],
            },
        ],
    },
    Handout {
        week: 4,
        title: "Tables and Lists",
        subtitle: "Building and formatting tables, bulleted and numbered lists",
        sections: &[
            HandoutSection {
                heading: "Tables",
                points: &[
                    "Insert tables and convert text to tables",
                    "Merge and split cells, resize rows and columns",
                    "Table styles, header rows and sorting",
                ],
            },
            HandoutSection {
                heading: "Lists",
                points: &[
                    "Bulleted and numbered lists",
                    "Multilevel lists and list levels",
                    "Restart and continue numbering",
                ],
            },
        ],
    },
    Handout {
        week: 5,
        title: "Graphics and Visual Elements",
        subtitle: "Pictures, shapes, SmartArt and text boxes",
        sections: &[
            HandoutSection {
                heading: "Inserting graphics",
                points: &[
                    "Pictures, online images and screenshots",
                    "Shapes, icons and 3D models",
                    "SmartArt graphics",
                ],
            },
            HandoutSection {
                heading: "Formatting graphics",
                points: &[
                    "Text wrapping and positioning",
                    "Picture styles, effects and alt text",
                ],
            },
        ],
    },
    Handout {
        week: 6,
        title: "References and Long Documents",
        subtitle: "Footnotes, citations, captions and tables of contents",
        sections: &[
            HandoutSection {
                heading: "Reference elements",
                points: &[
                    "Footnotes and endnotes",
                    "Citation sources and bibliographies",
                    "Captions and cross-references",
                ],
            },
            HandoutSection {
                heading: "Document navigation aids",
                points: &[
                    "Insert and update a table of contents",
                    "Bookmarks and hyperlinks",
                ],
            },
        ],
    },
    Handout {
        week: 7,
        title: "Collaboration and Review",
        subtitle: "Comments, tracked changes and document protection",
        sections: &[
            HandoutSection {
                heading: "Reviewing",
                points: &[
                    "Add, reply to and resolve comments",
                    "Track changes and review panes",
                    "Accept and reject revisions",
                ],
            },
            HandoutSection {
                heading: "Preparing for sharing",
                points: &[
                    "Inspect document and check accessibility",
                    "Restrict editing and mark as final",
                ],
            },
        ],
    },
    Handout {
        week: 8,
        title: "Mail Merge and Exam Review",
        subtitle: "Mail merge workflow and certification practice",
        sections: &[
            HandoutSection {
                heading: "Mail merge",
                points: &[
                    "Select recipients and edit the recipient list",
                    "Insert merge fields and rules",
                    "Preview results and finish the merge",
                ],
            },
            HandoutSection {
                heading: "Exam preparation",
                points: &[
                    "Timed practice projects",
                    "Common objective checklist review",
                ],
            },
        ],
    },
];

pub fn find_handout(week: u8) -> Option<&'static Handout> {
    HANDOUTS.iter().find(|handout| handout.week == week)
}
