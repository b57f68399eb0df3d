use super::{NextSteps, ProjectPage, Section};
use crate::view::blocks::{Block, Link};

pub static PAGE: ProjectPage = ProjectPage {
    slug: "parameter-updates",
    title: "Parameter updates",
    subtitle: "Keeping PolicyEngine US current with the latest tax and benefit legislation",
    sections: &[
        Section {
            title: "Project overview",
            blocks: &[Block::Paragraph(
                "An important element in maintaining the accuracy of microsimulation analyses is updating tax and benefit \
                 parameters to reflect the latest federal and state legislation. I helped update some state parameters like \
                 Minnesota, Arkansas, Indiana and Arizona.",
            )],
        },
        Section {
            title: "My contributions",
            blocks: &[Block::Bullets(&[
                "Updated YAML configuration files with new tax brackets, rates, and deduction amounts for the 2024 tax year",
                "Updated unit tests to validate parameter updates",
            ])],
        },
        Section {
            title: "Learnings",
            blocks: &[
                Block::Bullets(&[
                    "Learned the policyengine_us repo structure and got a better sense of how microsim works",
                    "Practiced a lot of git commands, learned the importance of changelog entries, linting...",
                    "Got SO EXCITED when my Minnesota PR was finally merged, after over a month and like 10 rounds of reviews \
                     (thanks Pavel, David and Max!!)",
                ]),
                Block::Links(&[Link {
                    label: "View on GitHub →",
                    url: "https://github.com/PolicyEngine/policyengine-us",
                }]),
            ],
        },
    ],
    next_steps: NextSteps {
        intro: "Shoutout to Pavel, David, Ziming, and Daphne who regularly update the model!",
        items: &[],
        issues: &[Link {
            label: "policyengine_us issues",
            url: "https://github.com/PolicyEngine/policyengine-us/issues",
        }],
    },
};
