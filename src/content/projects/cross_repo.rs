use super::{NextSteps, ProjectPage, Section};
use crate::view::blocks::{Block, Link};

pub static PAGE: ProjectPage = ProjectPage {
    slug: "cross-repo",
    title: "Cross-repo contributions",
    subtitle: "Bug fixes, feature additions, and documentation improvements across the PolicyEngine ecosystem",
    sections: &[
        Section {
            title: "Project overview",
            blocks: &[
                Block::Paragraph(
                    "Beyond my main projects, I contributed across PolicyEngine's codebase ecosystem addressing small issues \
                     that required quick fixes.",
                ),
                Block::Card {
                    title: "📊 MicroDF",
                    items: &[
                        "Fixed bugs in microseries and microdataframe methods",
                        "Removed visualization functionality we weren't using anymore",
                    ],
                },
                Block::Card {
                    title: "💾 PolicyEngine US Data",
                    items: &[
                        "Imputed new variables for OBBA",
                        "Helped improving calibration",
                        "Tested dataset minimizing techniques",
                    ],
                },
                Block::Card {
                    title: "🇺🇸 PolicyEngine US",
                    items: &["Added new variables for OBBA and calibration"],
                },
                Block::Card {
                    title: "🇬🇧 PolicyEngine UK",
                    items: &["Addressed a couple code-health issues"],
                },
            ],
        },
        Section {
            title: "My contributions",
            blocks: &[Block::Bullets(&[
                "Generally helping improve code quality and maintainability across the codebase",
                "I even filed a PR in policyengine_canada once!",
            ])],
        },
        Section {
            title: "Learnings",
            blocks: &[
                Block::Bullets(&[
                    "I got more familiar with the PolicyEngine codebase and how all repos interact with each other",
                    "It gave me side-quests to work on while waiting for reviews on my main projects",
                ]),
                Block::Links(&[Link {
                    label: "View PolicyEngine's GitHub →",
                    url: "https://github.com/PolicyEngine",
                }]),
            ],
        },
    ],
    next_steps: NextSteps {
        intro: "I'm sure there will be plenty of issues to address on the side for many years to come, but for now, I have a \
                couple of PRs open that are ready for review (or may need to be closed as no longer relevant):",
        items: &[
            "Fixing the microdataframe sum function to respect the `axis` argument in microdf",
            "Making all files and directories in the UK repo be lower case",
            "Adding a test to policyengine_us_data to ensure the repo works with its direct dependencies",
        ],
        issues: &[
            Link {
                label: "policyengine_uk",
                url: "https://github.com/PolicyEngine/policyengine-uk/pull/1238",
            },
            Link {
                label: "microdf",
                url: "https://github.com/PolicyEngine/microdf/pull/263",
            },
            Link {
                label: "policyengine_us_data",
                url: "https://github.com/PolicyEngine/policyengine-us-data/pull/397",
            },
        ],
    },
};
