//! Display strings for every section, one bundle per [`Locale`].
//!
//! Both bundles are instances of the same struct, so a key can't exist in
//! one language and be missing from the other.

use crate::i18n::locale::Locale;
use serde::Serialize;

#[derive(Debug, PartialEq, Serialize)]
pub struct TranslationBundle {
    pub nav: NavText,
    pub hero: HeroText,
    pub about: AboutText,
    pub services: ServicesText,
    pub portfolio: PortfolioText,
    pub contact: ContactText,
    pub footer: FooterText,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct NavText {
    pub solutions: &'static str,
    pub portfolio: &'static str,
    pub about: &'static str,
    pub contact: &'static str,
    pub touch: &'static str,
    pub open_menu: &'static str,
    pub close_menu: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct HeroText {
    pub headline_lead: &'static str,
    pub headline_highlight: &'static str,
    pub headline_tail: &'static str,
    pub subtitle: &'static str,
    pub cta_contact: &'static str,
    pub cta_portfolio: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct AboutText {
    pub title_1: &'static str,
    pub title_highlight: &'static str,
    pub subtitle: &'static str,
    pub story_label: &'static str,
    pub company_name: &'static str,
    pub paragraph_1: &'static str,
    pub paragraph_2: &'static str,
    pub paragraph_3: &'static str,
    pub team_name: &'static str,
    pub team_role: &'static str,
    pub founder_alt: &'static str,
    pub stat_projects: &'static str,
    pub stat_clients: &'static str,
    pub stat_years: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ServiceCopy {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ServiceItems {
    pub ar: ServiceCopy,
    pub music: ServiceCopy,
    pub events: ServiceCopy,
    pub web: ServiceCopy,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ServicesText {
    pub title_1: &'static str,
    pub title_highlight: &'static str,
    pub subtitle: &'static str,
    pub learn_more: &'static str,
    pub items: ServiceItems,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct CategoryLabels {
    pub all: &'static str,
    pub ar: &'static str,
    pub music: &'static str,
    pub events: &'static str,
    pub web: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct PortfolioText {
    pub title_1: &'static str,
    pub title_highlight: &'static str,
    pub subtitle: &'static str,
    pub categories: CategoryLabels,
    pub view_project: &'static str,
    pub view_all: &'static str,
    pub empty: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ContactText {
    pub title_1: &'static str,
    pub title_highlight: &'static str,
    pub subtitle: &'static str,
    pub get_in_touch: &'static str,
    pub desc: &'static str,
    pub start_convo: &'static str,
    pub response_time: &'static str,
    pub send_message: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct FooterText {
    pub tagline: &'static str,
    pub solutions_heading: &'static str,
    pub company_heading: &'static str,
    pub about_us: &'static str,
    pub rights: &'static str,
}

pub fn lookup(locale: Locale) -> &'static TranslationBundle {
    match locale {
        Locale::English => &EN,
        Locale::Thai => &TH,
    }
}

static EN: TranslationBundle = TranslationBundle {
    nav: NavText {
        solutions: "Solutions",
        portfolio: "Portfolio",
        about: "About",
        contact: "Contact",
        touch: "Get in Touch",
        open_menu: "Toggle menu",
        close_menu: "Close menu",
    },
    hero: HeroText {
        headline_lead: "We Create",
        headline_highlight: "Captivating",
        headline_tail: "Digital Experiences.",
        subtitle: "From immersive AR experiences to impactful music marketing campaigns, we bring your vision to life with innovative digital solutions.",
        cta_contact: "Get in Touch",
        cta_portfolio: "View Our Work",
    },
    about: AboutText {
        title_1: "Who",
        title_highlight: "We Are",
        subtitle: "Innovating the digital landscape one project at a time",
        story_label: "Our Story",
        company_name: "Visualize Media Innovation Co., Ltd.",
        paragraph_1: "VMI Media is a creative digital agency that specializes in bringing innovative ideas to life. We combine cutting-edge technology with creative storytelling to deliver exceptional results for our clients.",
        paragraph_2: "From augmented reality experiences that captivate audiences to music marketing campaigns that drive engagement, we handle every aspect of digital media with passion and precision.",
        paragraph_3: "Our team of experts is dedicated to pushing boundaries and creating digital experiences that leave lasting impressions.",
        team_name: "VMI Media Team",
        team_role: "Founders & Creative Directors",
        founder_alt: "VMI Media Founder",
        stat_projects: "Projects",
        stat_clients: "Clients",
        stat_years: "Years",
    },
    services: ServicesText {
        title_1: "Our",
        title_highlight: "Solutions",
        subtitle: "Comprehensive digital services to elevate your brand",
        learn_more: "Learn more",
        items: ServiceItems {
            ar: ServiceCopy {
                title: "Augmented Reality",
                description: "Immersive AR filters, brand activations and product visualizations that let audiences interact with your brand.",
            },
            music: ServiceCopy {
                title: "Music Marketing",
                description: "Release campaigns, artist branding and streaming promotion that turn listeners into fans.",
            },
            events: ServiceCopy {
                title: "Event Organizing",
                description: "Seminars, launches and brand experiences planned and run end to end.",
            },
            web: ServiceCopy {
                title: "Website Creation",
                description: "Modern, fast websites and e-commerce platforms built around your business goals.",
            },
        },
    },
    portfolio: PortfolioText {
        title_1: "Our",
        title_highlight: "Portfolio",
        subtitle: "Explore our latest projects and creative works",
        categories: CategoryLabels {
            all: "All",
            ar: "AR",
            music: "Music Marketing",
            events: "Event Organize",
            web: "Website Creation",
        },
        view_project: "View Project",
        view_all: "View All Projects",
        empty: "New projects in this category are coming soon.",
    },
    contact: ContactText {
        title_1: "Let's",
        title_highlight: "Work Together",
        subtitle: "Ready to bring your ideas to life? Reach out and let's talk.",
        get_in_touch: "Get in Touch",
        desc: "Tell us about your project and our team will help you find the right solution for your brand.",
        start_convo: "Start a Conversation",
        response_time: "We usually respond within 24 hours",
        send_message: "Send Message",
        phone: "Phone",
        email: "Email",
    },
    footer: FooterText {
        tagline: "Visualize Media Innovation Co., Ltd. - Creating captivating digital experiences through AR, music marketing, events, and web solutions.",
        solutions_heading: "Solutions",
        company_heading: "Company",
        about_us: "About Us",
        rights: "All rights reserved.",
    },
};

static TH: TranslationBundle = TranslationBundle {
    nav: NavText {
        solutions: "บริการ",
        portfolio: "ผลงาน",
        about: "เกี่ยวกับเรา",
        contact: "ติดต่อ",
        touch: "ติดต่อเรา",
        open_menu: "เปิด/ปิดเมนู",
        close_menu: "ปิดเมนู",
    },
    hero: HeroText {
        headline_lead: "เราสร้างสรรค์",
        headline_highlight: "ประสบการณ์ดิจิทัล",
        headline_tail: "ที่น่าจดจำ",
        subtitle: "ตั้งแต่ประสบการณ์ AR ที่สมจริง ไปจนถึงแคมเปญการตลาดเพลงที่ทรงพลัง เราเปลี่ยนวิสัยทัศน์ของคุณให้เป็นจริงด้วยโซลูชันดิจิทัลที่สร้างสรรค์",
        cta_contact: "ติดต่อเรา",
        cta_portfolio: "ดูผลงานของเรา",
    },
    about: AboutText {
        title_1: "เรา",
        title_highlight: "คือใคร",
        subtitle: "สร้างสรรค์โลกดิจิทัล ทีละโปรเจกต์",
        story_label: "เรื่องราวของเรา",
        company_name: "บริษัท วิชวลไลซ์ มีเดีย อินโนเวชั่น จำกัด",
        paragraph_1: "VMI Media คือเอเจนซีดิจิทัลเชิงสร้างสรรค์ที่เชี่ยวชาญการเปลี่ยนไอเดียให้เป็นจริง เราผสานเทคโนโลยีล้ำสมัยเข้ากับการเล่าเรื่องอย่างสร้างสรรค์ เพื่อส่งมอบผลลัพธ์ที่โดดเด่นให้กับลูกค้า",
        paragraph_2: "ตั้งแต่ประสบการณ์ความจริงเสริมที่ดึงดูดผู้ชม ไปจนถึงแคมเปญการตลาดเพลงที่สร้างการมีส่วนร่วม เราดูแลงานสื่อดิจิทัลทุกด้านด้วยความใส่ใจและแม่นยำ",
        paragraph_3: "ทีมผู้เชี่ยวชาญของเรามุ่งมั่นก้าวข้ามขีดจำกัด และสร้างประสบการณ์ดิจิทัลที่สร้างความประทับใจอย่างยั่งยืน",
        team_name: "ทีม VMI Media",
        team_role: "ผู้ก่อตั้งและผู้อำนวยการฝ่ายสร้างสรรค์",
        founder_alt: "ผู้ก่อตั้ง VMI Media",
        stat_projects: "โปรเจกต์",
        stat_clients: "ลูกค้า",
        stat_years: "ปี",
    },
    services: ServicesText {
        title_1: "บริการ",
        title_highlight: "ของเรา",
        subtitle: "บริการดิจิทัลครบวงจรเพื่อยกระดับแบรนด์ของคุณ",
        learn_more: "ดูเพิ่มเติม",
        items: ServiceItems {
            ar: ServiceCopy {
                title: "ความจริงเสริม (AR)",
                description: "ฟิลเตอร์ AR กิจกรรมแบรนด์ และการแสดงสินค้าแบบสมจริง ที่ให้ผู้ชมได้มีปฏิสัมพันธ์กับแบรนด์ของคุณ",
            },
            music: ServiceCopy {
                title: "การตลาดเพลง",
                description: "แคมเปญเปิดตัวผลงาน การสร้างแบรนด์ศิลปิน และการโปรโมตบนสตรีมมิง ที่เปลี่ยนผู้ฟังให้เป็นแฟนเพลง",
            },
            events: ServiceCopy {
                title: "จัดงานอีเวนต์",
                description: "สัมมนา งานเปิดตัว และประสบการณ์แบรนด์ วางแผนและดำเนินงานครบทุกขั้นตอน",
            },
            web: ServiceCopy {
                title: "สร้างเว็บไซต์",
                description: "เว็บไซต์และแพลตฟอร์มอีคอมเมิร์ซที่ทันสมัยและรวดเร็ว ออกแบบตามเป้าหมายธุรกิจของคุณ",
            },
        },
    },
    portfolio: PortfolioText {
        title_1: "ผลงาน",
        title_highlight: "ของเรา",
        subtitle: "สำรวจโปรเจกต์และผลงานสร้างสรรค์ล่าสุดของเรา",
        categories: CategoryLabels {
            all: "ทั้งหมด",
            ar: "AR",
            music: "การตลาดเพลง",
            events: "จัดงานอีเวนต์",
            web: "สร้างเว็บไซต์",
        },
        view_project: "ดูโปรเจกต์",
        view_all: "ดูผลงานทั้งหมด",
        empty: "ผลงานในหมวดนี้กำลังจะมาเร็ว ๆ นี้",
    },
    contact: ContactText {
        title_1: "มาร่วม",
        title_highlight: "งานกับเรา",
        subtitle: "พร้อมเปลี่ยนไอเดียของคุณให้เป็นจริงหรือยัง? ติดต่อเราได้เลย",
        get_in_touch: "ติดต่อเรา",
        desc: "เล่าให้เราฟังเกี่ยวกับโปรเจกต์ของคุณ แล้วทีมของเราจะช่วยหาโซลูชันที่เหมาะกับแบรนด์ของคุณ",
        start_convo: "เริ่มต้นพูดคุย",
        response_time: "โดยปกติเราจะตอบกลับภายใน 24 ชั่วโมง",
        send_message: "ส่งข้อความ",
        phone: "โทรศัพท์",
        email: "อีเมล",
    },
    footer: FooterText {
        tagline: "บริษัท วิชวลไลซ์ มีเดีย อินโนเวชั่น จำกัด - สร้างสรรค์ประสบการณ์ดิจิทัลผ่าน AR การตลาดเพลง งานอีเวนต์ และเว็บไซต์",
        solutions_heading: "บริการ",
        company_heading: "บริษัท",
        about_us: "เกี่ยวกับเรา",
        rights: "สงวนลิขสิทธิ์",
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::collections::BTreeMap;

    fn flatten(prefix: &str, value: &Value, out: &mut BTreeMap<String, String>) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", prefix, key)
                    };
                    flatten(&path, child, out);
                }
            }
            Value::String(s) => {
                out.insert(prefix.to_string(), s.clone());
            }
            other => panic!("unexpected value at {}: {:?}", prefix, other),
        }
    }

    fn entries(locale: Locale) -> BTreeMap<String, String> {
        let value = serde_json::to_value(lookup(locale)).unwrap();
        let mut out = BTreeMap::new();
        flatten("", &value, &mut out);
        out
    }

    #[test]
    fn bundles_have_identical_key_sets() {
        let en: Vec<_> = entries(Locale::English).into_keys().collect();
        let th: Vec<_> = entries(Locale::Thai).into_keys().collect();
        assert!(en.contains(&"services.items.web.description".to_string()));
        assert_eq!(en, th);
    }

    #[test]
    fn no_value_is_blank() {
        for locale in Locale::ALL {
            for (key, value) in entries(locale) {
                assert!(!value.trim().is_empty(), "{} is blank in {}", key, locale);
            }
        }
    }

    #[test]
    fn lookup_returns_the_matching_bundle() {
        assert_eq!(lookup(Locale::English).nav.portfolio, "Portfolio");
        assert_eq!(lookup(Locale::Thai).nav.portfolio, "ผลงาน");
        assert_ne!(lookup(Locale::English), lookup(Locale::Thai));
    }
}
