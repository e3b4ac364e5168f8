#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Static reference taxonomies compiled from the branch records.
//!
//! None of these lists are derived from the record table. They were
//! transcribed by hand from the leaked documents and are exposed as
//! constant data so any surface can present them next to the computed
//! aggregations.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Charge groupings, ordered from most to least frequent in the records.
///
/// The same charges were brought against children and the adults detained
/// with them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ChargeCategory {
    /// Taking part in demonstrations and riots
    DemonstrationParticipation,
    /// Membership in armed groups
    ArmedGroupMembership,
    /// Material or logistical support to armed fighters
    DealingWithArmed,
    /// Incitement
    Incitement,
    /// Suspicion over security status
    SecuritySuspicion,
    /// Contact with people labelled terrorists
    ContactWithTerrorists,
    /// Everything else (theft, forgery, impersonation, ...)
    Miscellaneous,
}

impl ChargeCategory {
    /// Frequency rank, starting at 1 for the most common charge.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::DemonstrationParticipation => 1,
            Self::ArmedGroupMembership => 2,
            Self::DealingWithArmed => 3,
            Self::Incitement => 4,
            Self::SecuritySuspicion => 5,
            Self::ContactWithTerrorists => 6,
            Self::Miscellaneous => 7,
        }
    }

    /// Arabic heading used in the records.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DemonstrationParticipation => "المشاركة في المظاهرات وأعمال الشغب",
            Self::ArmedGroupMembership => "العضوية في مجموعات إرهابية مسلحة",
            Self::DealingWithArmed => "التعامل مع المسلحين",
            Self::Incitement => "التحريض",
            Self::SecuritySuspicion => "الاشتباه بوضعهم الأمني",
            Self::ContactWithTerrorists => "التواصل مع إرهابيين",
            Self::Miscellaneous => "مختلف",
        }
    }

    /// What the grouping covers.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::DemonstrationParticipation => {
                "تشمل المشاركة في المظاهرات، أعمال الشغب والتخريب، التحريض على التظاهر، مقاومة الدوريات، ترديد شعارات مناهضة للدولة، ورمي الحجارة على قوات الأمن."
            }
            Self::ArmedGroupMembership => {
                "تشمل الانضمام إلى جماعات مسلحة مختلفة، المشاركة في عمليات إرهابية ضد الجيش والأمن، إقامة حواجز على الطرقات، وحيازة أسلحة."
            }
            Self::DealingWithArmed => {
                "تقديم الدعم المادي واللوجستي للمسلحين، نقل الأسلحة والذخيرة، توفير المأوى، وتقديم المعلومات."
            }
            Self::Incitement => {
                "يشمل التحريض على التظاهر، التحريض الطائفي، وتحريض العسكريين على الانشقاق."
            }
            Self::SecuritySuspicion => {
                "مراقبة الحواجز والمنشآت الحكومية، حيازة مقاطع مسيئة على الهاتف، وعدم الامتثال لأوامر الدورية."
            }
            Self::ContactWithTerrorists => {
                "التواصل مع أفراد معروفين بانتمائهم لجماعات إرهابية، وتبادل المعلومات معهم."
            }
            Self::Miscellaneous => {
                "تشمل سرقة، تزوير، انتحال صفة أمنية، تخريب ممتلكات عامة، محاولة مغادرة البلاد بطريقة غير شرعية."
            }
        }
    }

    /// Returns all variants in rank order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::DemonstrationParticipation,
            Self::ArmedGroupMembership,
            Self::DealingWithArmed,
            Self::Incitement,
            Self::SecuritySuspicion,
            Self::ContactWithTerrorists,
            Self::Miscellaneous,
        ]
    }
}

/// How an investigator is identified in the records.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestigatorCategory {
    /// Referenced only by a code such as `ث4`, `ز10` or `ل2`
    Coded,
    /// Referenced by first or full name, or by the department/committee
    Named,
}

impl InvestigatorCategory {
    /// Arabic heading.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Coded => "الفئة الأولى",
            Self::Named => "الفئة الثانية",
        }
    }

    /// What the category covers.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Coded => {
                "تشمل المحققين الذين لم تُذكر أسماؤهم، بل رموز تشير إليهم (مثل: ث4، ز10، ل2)."
            }
            Self::Named => {
                "تضم المحققين الذين ذُكرت أسماؤهم الأولى أو الكاملة، وفي بعض الحالات القسم أو اللجنة المسؤولة عن التحقيق بدلًا من اسم المحقق."
            }
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Coded, Self::Named]
    }
}

/// Military ranks that appear on investigations.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MilitaryRank {
    LieutenantColonel,
    Captain,
    Major,
    Lieutenant,
    WarrantOfficer,
    BrigadierGeneral,
    Colonel,
}

impl MilitaryRank {
    /// Arabic rank title.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LieutenantColonel => "مقدم",
            Self::Captain => "نقيب",
            Self::Major => "رائد",
            Self::Lieutenant => "ملازم",
            Self::WarrantOfficer => "مساعد",
            Self::BrigadierGeneral => "عميد",
            Self::Colonel => "عقيد",
        }
    }

    /// Returns all variants in the order they are listed in the records.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::LieutenantColonel,
            Self::Captain,
            Self::Major,
            Self::Lieutenant,
            Self::WarrantOfficer,
            Self::BrigadierGeneral,
            Self::Colonel,
        ]
    }
}

/// Investigation departments inside the branch.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestigationDepartment {
    /// Organisations and takfiri currents
    Organizations,
    /// Criminal and economic investigation
    CriminalEconomic,
    /// Security investigation and counter-terrorism
    SecurityCounterTerrorism,
    /// Disciplinary and conduct investigation
    Disciplinary,
}

impl InvestigationDepartment {
    /// Arabic department name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Organizations => "قسم التنظيمات والتيارات التكفيرية",
            Self::CriminalEconomic => "قسم التحقيق الجنائي والاقتصادي",
            Self::SecurityCounterTerrorism => "قسم التحقيق الأمني ومكافحة الإرهاب",
            Self::Disciplinary => "قسم التحقيق الانضباطي والمسلكي",
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Organizations,
            Self::CriminalEconomic,
            Self::SecurityCounterTerrorism,
            Self::Disciplinary,
        ]
    }
}

/// Investigation committees named in the records.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Committee {
    First,
    Second,
    /// Cases handled jointly by the first and second committees
    FirstAndSecond,
    Field,
    /// Committee for investigating "hostile" detainees
    Hostiles,
}

impl Committee {
    /// Arabic committee name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::First => "اللجنة الأولى",
            Self::Second => "اللجنة الثانية",
            Self::FirstAndSecond => "لجنة أولى + لجنة ثانية",
            Self::Field => "لجنة الميدان",
            Self::Hostiles => "لجنة التحقيق مع المعادين",
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::First,
            Self::Second,
            Self::FirstAndSecond,
            Self::Field,
            Self::Hostiles,
        ]
    }
}

/// Agencies, courts, units and officials mentioned anywhere in the records,
/// in the order they were catalogued.
pub const REFERENCED_ENTITIES: &[&str] = &[
    "اللجنة الأمنية بحمص",
    "إدارة المخابرات العامة",
    "شعبة الأمن السياسي",
    "قسم المخابرات الجوية بحماه",
    "إدارة مكافحة المخدرات",
    "مكتب الأمن الوطني",
    "وزارة العدل",
    "وزارة الداخلية",
    "الإدارة السياسية",
    "وزارة الشؤون الاجتماعية والعمل",
    "فرع المهام الخاصة",
    "قسم العمليات الخاصة",
    "فرع المنطقة الجنوبية",
    "فرع المنطقة الشمالية",
    "فرع المنطقة الوسطى",
    "فرع المنطقة الشرقية",
    "قسم قطاع المدينة",
    "فرع المعلومات",
    "فرع الشرطة العسكرية بدمشق",
    "قسم حماه",
    "قسم إدلب",
    "قسم السويداء",
    "كتيبة المطارات",
    "القوات العاملة على الأرض",
    "إدارة الاتصالات",
    "مصرف سوريا المركزي",
    "اللجنة الخاصة بتسوية أوضاع المتورطين بالأحداث",
    "اللجنة المشكلة بالرقم 1/8/1337",
    "مجموعة التنفيذ الخاصة",
    "هيئة مكافحة غسيل الأموال وتمويل الإرهاب",
    "الديوان الخاص",
    "الأصدقاء (إشارة غامضة)",
    "مكتب الأمن بالفرقة الرابعة",
    "إدارة الهجرة والجوازات",
    "الفرع الفني",
    "قسم التنظيمات",
    "الوحدة 17",
    "محكمة الميدان العسكرية",
    "النيابة العامة العسكرية",
    "محكمة قضايا الإرهاب",
    "القضاء المختص",
    "لوائح المطلوبين",
    "المحامي العام الأول",
    "القضاء العسكري",
    "إدارة السجلات العسكرية",
    "محافظة ريف دمشق",
    "محكمة الأحداث",
    "فرع الأمن الجنائي",
    "الشرطة العسكرية",
    "وزير الدفاع",
    "إدارة شؤون الضباط",
    "فرع التحقيق",
    "قسم الساحلية",
    "السيد اللواء قائد القوى الجوية",
    "المستشار",
    "كتائب البعث",
    "مشفى العباسيين",
    "مشفى أمن",
    "شعبة المخابرات",
    "مكتب أمن القصر",
    "مجموعة الصقور",
    "الأجهزة الأمنية",
    "الخدمات الطبية",
    "وزير المالية",
    "إدارة الأمن الجنائي",
    "سجن صيدنايا",
    "هيئة الأركان",
    "الفرقة الرابعة دبابات",
    "وزارة الداخلية (مكتب الوزير)",
    "حاكم مصرف سوريا المركزي",
    "وزيرة الشؤون الاجتماعية والعمل",
    "قسم ديوان الإدارة",
    "الأمن الداخلي",
    "قناة المنار",
];

/// Verbatim excerpts from the record entries, shown alongside the report
/// as illustration. Names redacted in the records stay redacted.
pub const RECORD_EXCERPTS: &[&str] = &[
    "إخلاء سبيل المذكور وربطه بشكل رسمي لتقصي اخبار الاطفال المودعين لدى الادارة في قرية الاطفال sos",
    "كتاب الى الوزيره لحجب اسماء الاطفال المودعين لصالحنا في مراكز الايواء ودور الرعاية",
    "مقابله تلفزيونية مع الطفل الموجود في منزل المساعد1 ع ت",
    "إحالة المدعوين ( ـــ ـــ ) الى محكمة الاحداث بعد إجراء مقابلة تلفزيونية معهم لكشف الوسائل القذرة لقادة الثورة المزعومة للرأي العام الداخلي والخارجي",
    "إجابة الامن الوطني مع الراي بعدم الموافقة على انهاء وضع الطفلتين لانهما لا تزالا تشكلان عامل رادع جدي لوالدهما",
    "التحفظ على المدعوين ( ـ ـ وأطفالها الثلاثة ) للإستفادة منهم في إحدى عمليات المبادلة والتفاوض مع مسلحي الفيجة",
    "مذكرة عرض بخصوص حليب اطفال ومستلزمات اطفال\nالموافقة على صرف المبلغ ع/ط محاسب الادارة",
    "فصل الحدث ... من المجموعات التابعة لادارتنا وعدم تسليمه اي سلاح",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charge_ranks_follow_listing_order() {
        for (i, charge) in ChargeCategory::all().iter().enumerate() {
            assert_eq!(usize::from(charge.rank()), i + 1, "{charge:?}");
        }
    }

    #[test]
    fn every_variant_has_a_label() {
        assert!(ChargeCategory::all().iter().all(|c| !c.label().is_empty()));
        assert!(ChargeCategory::all().iter().all(|c| !c.description().is_empty()));
        assert!(MilitaryRank::all().iter().all(|r| !r.label().is_empty()));
        assert!(InvestigationDepartment::all().iter().all(|d| !d.label().is_empty()));
        assert!(Committee::all().iter().all(|c| !c.label().is_empty()));
        assert_eq!(InvestigatorCategory::all().len(), 2);
    }

    #[test]
    fn names_roundtrip_through_strum() {
        for rank in MilitaryRank::all() {
            let parsed: MilitaryRank = rank.to_string().parse().unwrap();
            assert_eq!(parsed, *rank);
        }
        assert_eq!(
            "FIRST_AND_SECOND".parse::<Committee>().unwrap(),
            Committee::FirstAndSecond
        );
    }

    #[test]
    fn record_excerpts_are_listed_in_order() {
        assert_eq!(RECORD_EXCERPTS.len(), 8);
        assert!(RECORD_EXCERPTS[0].starts_with("إخلاء سبيل"));
        assert!(RECORD_EXCERPTS.iter().all(|e| !e.trim().is_empty()));
    }

    #[test]
    fn referenced_entities_are_unique() {
        let mut entities = REFERENCED_ENTITIES.to_vec();
        entities.sort_unstable();
        entities.dedup();
        assert_eq!(entities.len(), REFERENCED_ENTITIES.len());
    }
}
