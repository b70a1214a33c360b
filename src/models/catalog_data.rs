//! Compiled-in e-book catalog.
//!
//! grade -> program -> subject -> resources. PDF ids are Google Drive folder
//! ids, flipbook paths are relative to the flipbook host. Subject keys are
//! stored already normalized.

use super::resource::{GradeTable, LinkItem, PartEntry, ProgramTable, ResourceEntry};

/// AI tools offered under "ai-education" in every grade.
pub const AI_TOOLS: &[LinkItem] = &[
    LinkItem::named("toolbaz.com/", "Toolbaz AI"),
    LinkItem::named("www.magicschool.ai/", "MagicSchool AI"),
    LinkItem::named("www.eduaide.ai/", "EduAide AI"),
    LinkItem::named("www.teachy.app/en/", "Teachy AI"),
];

const AI_EDUCATION: ResourceEntry = ResourceEntry::UNSET.with_ai_tools(AI_TOOLS);

/// Shared by most grade 10 records whose PDFs live in one folder.
const GRADE_10_FOLDER: &str = "10HNYy6nQBn8CZkOmucZhqXFZ73MLc3jp";

pub static CATALOG: &[GradeTable] = &[
    GradeTable {
        grade: "1",
        programs: &[
            ProgramTable {
                program: "cambodia",
                subjects: &[
                    ("math", ResourceEntry::single("1GtH_b64YxegOsW0dbak0ot7cwLxGnYfE", "ayjcf/xlcl/")),
                    (
                        "science",
                        ResourceEntry::split(&[
                            PartEntry::new("1AKoB1TggCdjtj4JrwSzvKgmhpFCUNYTB", "ayjcf/unqv/", "Part 1"),
                            PartEntry::new("#", "ayjcf/lcec/", "Part 2"),
                        ])
                        .with_single("#", "#"),
                    ),
                    ("social", ResourceEntry::single("1SL0FWWCViBvQBz8lvnvHP_olw9zGk5l6", "ayjcf/jgfb/")),
                    ("khmer", ResourceEntry::single("1i2MGyGWPQwupjLDNCruRJmjS-VoikuKd", "ayjcf/wruc/")),
                    ("virtual-lab", ResourceEntry::UNSET),
                    ("ai-education", AI_EDUCATION),
                ],
            },
            ProgramTable {
                program: "america",
                subjects: &[
                    ("math", ResourceEntry::UNSET),
                    ("science", ResourceEntry::UNSET),
                    ("social", ResourceEntry::UNSET),
                    ("khmer", ResourceEntry::UNSET),
                ],
            },
        ],
    },
    GradeTable {
        grade: "2",
        programs: &[
            ProgramTable {
                program: "cambodia",
                subjects: &[
                    ("math", ResourceEntry::single("1AarunHQniUFrdyDEEYecND_LXo6FA4zH", "frszu/beag/")),
                    ("science", ResourceEntry::single("14PAVUeQyYmv8JdnS5yzcZeDdAfeYh_pl", "yhbke/egju/")),
                    ("social", ResourceEntry::single("1bO39VjJXE7P-WO7ovBUKKA69rY9mbKmW", "ayjcf/mdui/")),
                    ("khmer", ResourceEntry::single("1bc89FmtR2fSE8_oM1GbNfcFAuvlTD3hw", "ayjcf/wuqh/")),
                    ("virtual-lab", ResourceEntry::UNSET),
                    ("ai-education", AI_EDUCATION),
                ],
            },
            ProgramTable {
                program: "america",
                subjects: &[
                    ("math", ResourceEntry::UNSET),
                    ("science", ResourceEntry::UNSET),
                    ("social", ResourceEntry::UNSET),
                    ("khmer", ResourceEntry::UNSET),
                ],
            },
        ],
    },
    GradeTable {
        grade: "3",
        programs: &[
            ProgramTable {
                program: "cambodia",
                subjects: &[
                    ("math", ResourceEntry::single("14_I5gclFkQCE3adTnpMc3eNFmOgYaeEx", "frszu/mlxm/")),
                    ("science", ResourceEntry::single("1KHvzDUCykCco5lIYnTiY71892vtnUJ3g", "ayjcf/mdui/")),
                    ("social", ResourceEntry::single("1H762S5l6ZlJwSDKUY-FWX6ZlVTjqEJih", "ayjcf/mdui/")),
                    ("reading", ResourceEntry::single("1IUf3VFO2eubJf2UPp-WxznHSA3Dfqokb", "ayjcf/pvcf/")),
                    ("khmer", ResourceEntry::single("1BaL5b2UDaWww1rFlCHMFj-hO6M_5c-Tf", "frszu/pesv/")),
                    ("virtual-lab", ResourceEntry::UNSET),
                    ("ai-education", AI_EDUCATION),
                ],
            },
            ProgramTable {
                program: "america",
                subjects: &[
                    ("math", ResourceEntry::UNSET),
                    ("science", ResourceEntry::UNSET),
                    ("social", ResourceEntry::UNSET),
                    ("reading", ResourceEntry::UNSET),
                    ("khmer", ResourceEntry::UNSET),
                ],
            },
        ],
    },
    GradeTable {
        grade: "4",
        programs: &[
            ProgramTable {
                program: "cambodia",
                subjects: &[
                    ("chaching", ResourceEntry::single("18s612_lwpCq7rRnWnHXJxdEmM7iUtTwo", "yhbke/wdok/")),
                    ("math", ResourceEntry::single("1XYND_ahzAg8bXXaKscAnUbJklxy7w-qM", "ayjcf/xjbv/")),
                    ("history", ResourceEntry::single("1m03_gTMECeMCVexcD0xQw3WjUDzS0jbe", "ayjcf/bicw/")),
                    ("khmer", ResourceEntry::single("13S4xJ8GVfYvB8gDxnlq5x3co1iPACxBT", "ayjcf/jwms/")),
                    ("english", ResourceEntry::single("1PF3x2ycB6vFkUzM0s8AFhkfRRUi6TKd7", "ayjcf/bicw/")),
                    ("science", ResourceEntry::single("1QhObR3ZFSr-JN6LfvAP-bacb8ds-s5Io", "ayjcf/gwqs/")),
                    ("social", ResourceEntry::single("1_hJWsTgM4O8Q9gFU_0oL7AkkiMrnlwHO", "frszu/ptwp/")),
                    ("virtual-lab", ResourceEntry::UNSET),
                    ("ai-education", AI_EDUCATION),
                ],
            },
            ProgramTable {
                program: "america",
                subjects: &[
                    ("chaching", ResourceEntry::UNSET),
                    ("math", ResourceEntry::UNSET),
                    ("history", ResourceEntry::UNSET),
                    ("khmer", ResourceEntry::UNSET),
                    ("english", ResourceEntry::UNSET),
                    ("science", ResourceEntry::UNSET),
                    ("social", ResourceEntry::UNSET),
                ],
            },
        ],
    },
    GradeTable {
        grade: "5",
        programs: &[
            ProgramTable {
                program: "cambodia",
                subjects: &[
                    ("math", ResourceEntry::single("1TmN7W2dcLpwrTHuZAuQnk4A8mgBQpi8l", "frszu/bjtb/")),
                    ("khmer", ResourceEntry::single("1gZTxkP2ciOQ6RmJoN541VMS0kPD6_qLp", "yhbke/rgyk/")),
                    ("english", ResourceEntry::single("1SYRUilVE2xW8Z_4MIxMLyaCL8GnmsLOJ", "yhbke/wdiv/")),
                    ("science", ResourceEntry::single("1qpRXBqmz9YvLpO5xJj1y5aUI4hIQzfH5", "yhbke/cxop/")),
                    ("social", ResourceEntry::single("1gt8sqHQ9tgGIKyGnL4Hc-xHrkhpUsTYs", "yhbke/qlef/")),
                    ("virtual-lab", ResourceEntry::UNSET),
                    ("ai-education", AI_EDUCATION),
                ],
            },
            ProgramTable {
                program: "america",
                subjects: &[
                    ("math", ResourceEntry::UNSET),
                    ("khmer", ResourceEntry::UNSET),
                    ("english", ResourceEntry::UNSET),
                    ("science", ResourceEntry::UNSET),
                    ("social", ResourceEntry::UNSET),
                ],
            },
        ],
    },
    GradeTable {
        grade: "6",
        programs: &[
            ProgramTable {
                program: "cambodia",
                subjects: &[
                    ("math", ResourceEntry::single("1Z8mFgA4a3hvU9e-MYgnJ_M_Y_8Gh-C7U", "frszu/mder/")),
                    ("history", ResourceEntry::single("14IWWmfqNSSIBpp9I8jzMgIzc6MEqx-xv", "frszu/yldb/")),
                    ("khmer", ResourceEntry::single("1NMAONAHIMCL-zQX3pz2tt2BqMn2CQPs1", "frszu/umpk/")),
                    ("english", ResourceEntry::single("1-KbBGLLQzsz1VBXSucTePh7UfGUoi3wN", "frszu/gozi/")),
                    ("science", ResourceEntry::single("1VbJoyCa-H0SNA3hstyPcPQWfszh5jNp9", "yhbke/ckvl/")),
                    ("social", ResourceEntry::single("1N9nLoo5aLzZ3tPP_trwBKRDX3YpOF_wl", "yhbke/ffmk/")),
                    ("virtual-lab", ResourceEntry::UNSET),
                    ("ai-education", AI_EDUCATION),
                ],
            },
            ProgramTable {
                program: "america",
                subjects: &[
                    ("math", ResourceEntry::UNSET),
                    ("history", ResourceEntry::UNSET),
                    ("khmer", ResourceEntry::UNSET),
                    ("english", ResourceEntry::UNSET),
                    ("science", ResourceEntry::UNSET),
                    ("social", ResourceEntry::UNSET),
                ],
            },
        ],
    },
    GradeTable {
        grade: "7",
        programs: &[
            ProgramTable {
                program: "cambodia",
                subjects: &[
                    ("math", ResourceEntry::single("1I_H7gOzD2HhMA0XIjx2WCVJMUSeZPI6b", "mylzw/yxwz/#p=1")),
                    ("khmer", ResourceEntry::single("1EikPEwmG9uniJ-NSOr6WMC3N_COJ7D9C", "yhbke/zrju/")),
                    ("english", ResourceEntry::single("1V9hnZcPSc1Y0oOnJcEwDYi5AKhSw_1wO", "yhbke/zyuq/")),
                    ("science", ResourceEntry::single("1Z6Ot0z3brZ8QWz9Dnzxo4MOT3Manixp8", "yhbke/edes/")),
                    ("social", ResourceEntry::single("1b7ie5S-IykSCbXpx4H67VuQ0P31h_KUV", "apzgt/xglk/")),
                    ("virtual-lab", ResourceEntry::UNSET),
                    ("ai-education", AI_EDUCATION),
                ],
            },
            ProgramTable {
                program: "america",
                subjects: &[
                    ("math", ResourceEntry::UNSET),
                    ("khmer", ResourceEntry::UNSET),
                    ("english", ResourceEntry::UNSET),
                    ("science", ResourceEntry::UNSET),
                    ("social", ResourceEntry::UNSET),
                ],
            },
        ],
    },
    GradeTable {
        grade: "8",
        programs: &[
            ProgramTable {
                program: "cambodia",
                subjects: &[
                    ("math", ResourceEntry::single("1_RUcBu5lITC_LGWG4BTdVJRTCx-vKmvQ", "mylzw/qoyg/#p=1")),
                    ("khmer", ResourceEntry::single("117cgoDQ3kEmN6J-2oY2OXL6ZrG7wFwnl", "apzgt/fink/")),
                    ("english", ResourceEntry::single("1wVK84yVqYnZfpayouwi_AWxj8VlVBtzh", "apzgt/cssh/")),
                    ("science", ResourceEntry::single("1jVmXAXEjquYWrnV9E2TY7--qLToL7gtz", "apzgt/lirg/")),
                    ("social", ResourceEntry::single("1v3ez-eLprH2KJArYqv3hkzJRGq9kx6MR", "apzgt/pjqz/")),
                    ("virtual-lab", ResourceEntry::UNSET),
                    ("ai-education", AI_EDUCATION),
                ],
            },
            ProgramTable {
                program: "america",
                subjects: &[
                    ("math", ResourceEntry::UNSET),
                    ("khmer", ResourceEntry::UNSET),
                    ("english", ResourceEntry::UNSET),
                    ("science", ResourceEntry::UNSET),
                    ("social", ResourceEntry::UNSET),
                ],
            },
        ],
    },
    GradeTable {
        grade: "9",
        programs: &[
            ProgramTable {
                program: "cambodia",
                subjects: &[
                    ("math", ResourceEntry::single("1ocymmBiv7X6DdmXk6yZczobLs9NDo_oD", "frszu/dpgo/")),
                    ("khmer", ResourceEntry::single("1sed5sZKo0V17G6UJko3uUZ7k41b7yT_D", "ecumu/usjo/")),
                    ("english", ResourceEntry::single("15cVajVp6-Y7vY5wcsUCGx8OHee3sM68B", "frszu/aiik/")),
                    ("science", ResourceEntry::single("1CQfDPPvd-pR_0CQCzb1Ycf5r7sW8F1po", "ecumu/ixrn/")),
                    ("social", ResourceEntry::single("1499jKWdcYWYF3p0e9M3O56YKI4o0t9x1", "ecumu/ygfz/")),
                    ("virtual-lab", ResourceEntry::UNSET),
                    ("ai-education", AI_EDUCATION),
                ],
            },
            ProgramTable {
                program: "america",
                subjects: &[
                    ("math", ResourceEntry::UNSET),
                    ("khmer", ResourceEntry::UNSET),
                    ("english", ResourceEntry::UNSET),
                    ("science", ResourceEntry::UNSET),
                    ("social", ResourceEntry::UNSET),
                ],
            },
        ],
    },
    GradeTable {
        grade: "10",
        programs: &[
            ProgramTable {
                program: "cambodia",
                subjects: &[
                    (
                        "math",
                        ResourceEntry::split(&[
                            PartEntry::new(GRADE_10_FOLDER, "ayjcf/asuh/", "Basic"),
                            PartEntry::new(GRADE_10_FOLDER, "ayjcf/fimj/", "Advance"),
                        ]),
                    ),
                    ("history", ResourceEntry::single(GRADE_10_FOLDER, "ayjcf/sqlz/")),
                    ("geography", ResourceEntry::single(GRADE_10_FOLDER, "ayjcf/sqlz/")),
                    (
                        "geology",
                        ResourceEntry::single(
                            GRADE_10_FOLDER,
                            "ebook.spm-edoc.com/ereading/Earth-EnvironmentGrade10/#p=1",
                        ),
                    ),
                    (
                        "biology",
                        ResourceEntry::single(
                            GRADE_10_FOLDER,
                            "ebook.spm-edoc.com/ereading/BiologyGrade10/#p=1",
                        ),
                    ),
                    ("physics", ResourceEntry::single(GRADE_10_FOLDER, "uouggg/cthz/")),
                    (
                        "chemistry",
                        ResourceEntry::single(
                            GRADE_10_FOLDER,
                            "ebook.spm-edoc.com/ereading/ChemistryGrade10/#p=1",
                        ),
                    ),
                    ("morality", ResourceEntry::single(GRADE_10_FOLDER, "ayjcf/sqlz/")),
                    ("khmer", ResourceEntry::single(GRADE_10_FOLDER, "uouggg/sgvw/")),
                    ("english", ResourceEntry::single("#", "ebook.spm-edoc.com/ereading/EnglishGrade10/#p=1")),
                    ("homeeconomic", ResourceEntry::single(GRADE_10_FOLDER, "ayjcf/sqlz/")),
                    ("virtual-lab", ResourceEntry::UNSET),
                    ("ai-education", AI_EDUCATION),
                ],
            },
            ProgramTable {
                program: "america",
                subjects: &[
                    ("math", ResourceEntry::UNSET),
                    ("history", ResourceEntry::UNSET),
                    ("geography", ResourceEntry::UNSET),
                    ("geology", ResourceEntry::UNSET),
                    ("biology", ResourceEntry::UNSET),
                    ("physics", ResourceEntry::UNSET),
                    ("chemistry", ResourceEntry::UNSET),
                    ("morality", ResourceEntry::UNSET),
                    ("khmer", ResourceEntry::UNSET),
                    ("english", ResourceEntry::UNSET),
                    ("homeeconomic", ResourceEntry::UNSET),
                ],
            },
        ],
    },
    GradeTable {
        grade: "11",
        programs: &[
            ProgramTable {
                program: "cambodia",
                subjects: &[
                    (
                        "math",
                        ResourceEntry::split(&[
                            PartEntry::new("1NaQYd0A7KyhW_5_yZ5ECFsXMgt7buRz5", "frszu/eywa/", "Basic"),
                            PartEntry::new(
                                "1NaQYd0A7KyhW_5_yZ5ECFsXMgt7buRz5",
                                "ebook.spm-edoc.com/ereading/Grade11Part2/MathGrade11/MathGrade11-Advance/#p=1",
                                "Advance",
                            ),
                        ]),
                    ),
                    ("chemistry", ResourceEntry::single("1SGUiRI8pn3RjaFii0TLraFkmyZz4tQ13", "frszu/bnao/")),
                    (
                        "economics",
                        ResourceEntry::single(
                            "1DAYoS9w5yAFekzKLiQgtNzH8I1h34Ezh",
                            "ebook.spm-edoc.com/ereading/Grade11Part1/EconomicGrade11/#p=1",
                        ),
                    ),
                    ("biology", ResourceEntry::single("1WkQeps-ZCxjgq6_cp7D8vEzeDbBTJm5k", "ayjcf/pipz/")),
                    ("history", ResourceEntry::single("1YpQ7c-AaiLC3nRZt0x0BBObRwn_gWu97", "ecumu/kbvx/")),
                    ("geology", ResourceEntry::single("1FsY6Q307POOmfkiorX_9LXqjWKpC6tOj", "uouggg/haki/")),
                    ("geography", ResourceEntry::single("1n8LJdHvqtLIV4j-EojjVCMyhRRDNRB9_", "uouggg/thqn/")),
                    ("physics", ResourceEntry::single("1OPLZFL7d6OAiXAiBbkn-5ZxOBeB6MCBT", "ayjcf/mcwq/")),
                    ("morality", ResourceEntry::single("1MMhVWhqTEiKBsCM4Hgl0miWGm792Zp0o", "uouggg/oyza/")),
                    ("english", ResourceEntry::single("1EyekbhoLLRSf21dEr9lEJs7ROI3BP2Co", "ayjcf/vern/")),
                    ("khmer", ResourceEntry::single("1IfVeWVxJwlGGYWGMqrnMBNjXAdjddUK9", "ayjcf/vthf/")),
                    ("virtual-lab", ResourceEntry::UNSET),
                    ("ai-education", AI_EDUCATION),
                ],
            },
            ProgramTable {
                program: "america",
                subjects: &[
                    ("math", ResourceEntry::UNSET),
                    ("chemistry", ResourceEntry::UNSET),
                    ("economics", ResourceEntry::UNSET),
                    ("biology", ResourceEntry::UNSET),
                    ("history", ResourceEntry::UNSET),
                    ("geology", ResourceEntry::UNSET),
                    ("geography", ResourceEntry::UNSET),
                    ("physics", ResourceEntry::UNSET),
                    ("morality", ResourceEntry::UNSET),
                    ("english", ResourceEntry::UNSET),
                    ("khmer", ResourceEntry::UNSET),
                ],
            },
        ],
    },
    GradeTable {
        grade: "12",
        programs: &[
            ProgramTable {
                program: "cambodia",
                subjects: &[
                    (
                        "math",
                        ResourceEntry::split(&[
                            PartEntry::new("1Mx5tDYI0ZvZPb1bxlBOQLbw0dZI6oWwn", "frszu/krbe/", "Basic"),
                            PartEntry::new("14K2TxqN3qto6PzLtE0yfYt8a8KP2wqRz", "frszu/wabt/", "Advance"),
                        ]),
                    ),
                    ("chemistry", ResourceEntry::single("1qJFtEgfVm_S4SzAnTiBQ2OJNO-Nic-kS", "uouggg/xnvs/")),
                    (
                        "biology",
                        ResourceEntry::single(
                            "1T-VVZARoJEviDjAn70X-A0o2nsp1BU-Q",
                            "ebook.spm-edoc.com/ereading/Grade12Part1/BiologyGrade12/#p=1",
                        ),
                    ),
                    (
                        "history",
                        ResourceEntry::single(
                            "1UVnl2twJy_bzWdsKTYQ_8_IZy3fkkdWA",
                            "ebook.spm-edoc.com/ereading/Grade12Part2/HistoryGrade12/#p=1",
                        ),
                    ),
                    (
                        "geology",
                        ResourceEntry::single(
                            "1DZoon-Oap3xT91Hm4GsyANdmF9YdX9C7",
                            "ebook.spm-edoc.com/ereading/Grade12Part1/EarthandEnvironmentGrade12/#p=1",
                        ),
                    ),
                    (
                        "geography",
                        ResourceEntry::single(
                            "1UaEJEcjeicwRmimSXTmevUfxR5Sgt2VS",
                            "ebook.spm-edoc.com/ereading/Grade12Part1/GeographicGrade12/#p=1",
                        ),
                    ),
                    ("physics", ResourceEntry::single("1qcowpi38uk3ZODKlDxzyEDZ4pVcelwUY", "yhbke/yevz/")),
                    ("morality", ResourceEntry::single("1QdT0anOEK-x57VrCkaVbrSiBedX3OKlr", "uouggg/fpfp/")),
                    ("english", ResourceEntry::single("16LOYCodyoPaSfj3FpVJLVIGz1yLIkUvj", "yhbke/gslb/")),
                    ("khmer", ResourceEntry::single("1CPwnyQK9_Pae_vRYf_7sm7P98OIT5eH-", "yhbke/wqqz/")),
                    ("virtual-lab", ResourceEntry::UNSET),
                    ("ai-education", AI_EDUCATION),
                ],
            },
            ProgramTable {
                program: "america",
                subjects: &[
                    ("math", ResourceEntry::UNSET),
                    ("chemistry", ResourceEntry::UNSET),
                    ("biology", ResourceEntry::UNSET),
                    ("history", ResourceEntry::UNSET),
                    ("geology", ResourceEntry::UNSET),
                    ("geography", ResourceEntry::UNSET),
                    ("physics", ResourceEntry::UNSET),
                    ("morality", ResourceEntry::UNSET),
                    ("english", ResourceEntry::UNSET),
                    ("khmer", ResourceEntry::UNSET),
                ],
            },
        ],
    },
];
