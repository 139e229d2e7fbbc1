//! Static copy shown by the page shell around the routed content.

pub const BRAND_NAME: &str = "JAYLOCS";
pub const BRAND_INITIAL: &str = "J";
pub const BRAND_TAGLINE: &str = "HAIRDRESSING & NAIL SALON";

pub const ANNOUNCEMENT: &str =
    "IMPORTANT: Come fully equipped (buy braids/products in advance) & with washed, blow-dried hair!";
pub const WORKING_HOURS: &str = "Open Thu-Sun: 8:30AM-7PM | Closed Mon-Wed | Meru Town";

pub const ABOUT_TITLE: &str = "JAYLOCS SALON";
pub const ABOUT: &str = "Premier hairdressing & nail salon serving Meru University students and the community with professional care.";
pub const LOCATION: &str = "Meru Town";
pub const AVAILABILITY: &str = "Available Thu-Sun";

pub const SERVICES: &[&str] = &[
    "Hair Dressing & Styling",
    "Nail Care & Polish",
    "Dreadlocks (Installation & Maintenance)",
    "Fashion Trench Coats",
];

pub const SERVICE_AREAS: &[&str] = &[
    "Nchiru (Main Location)",
    "Meru Town",
    "Maua",
    "Meru University",
    "Katheri",
];

pub fn copyright(year: i32) -> String {
    format!("© {} {} {}. All rights reserved.", year, BRAND_NAME, BRAND_TAGLINE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright(2025),
            "© 2025 JAYLOCS HAIRDRESSING & NAIL SALON. All rights reserved."
        );
    }
}
