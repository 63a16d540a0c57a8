//! Section registry: the fixed, ordered set of navigable page regions.
//!
//! Both the nav bar and the scroll navigator reference these ids, so a
//! control can never point at an anchor this module doesn't know about.

/// One of the five navigable regions of the page.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SectionId {
    Hero,
    About,
    Stack,
    Projects,
    Contact,
}

impl SectionId {
    /// Page order, top to bottom. Fixed at composition time.
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Stack,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// The subset shown in the nav bar. The hero is reachable only by
    /// scrolling back up.
    pub const NAV: [SectionId; 4] = [
        SectionId::About,
        SectionId::Stack,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// DOM anchor id for this section.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Stack => "stack",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Caption used on nav controls.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Stack => "Tech",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn page_order_is_fixed() {
        assert_eq!(
            SectionId::ALL,
            [
                SectionId::Hero,
                SectionId::About,
                SectionId::Stack,
                SectionId::Projects,
                SectionId::Contact,
            ]
        );
    }

    #[test]
    fn anchors_are_unique_and_nonempty() {
        let anchors: Vec<_> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        for a in &anchors {
            assert!(!a.is_empty());
        }
        let mut deduped = anchors.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), anchors.len());
    }

    #[test]
    fn nav_is_a_subsequence_of_the_page_order() {
        let mut all = SectionId::ALL.iter();
        for nav in SectionId::NAV {
            assert!(
                all.any(|s| *s == nav),
                "nav entry {nav:?} out of page order"
            );
        }
    }

    #[test]
    fn hero_is_not_a_nav_target() {
        assert!(!SectionId::NAV.contains(&SectionId::Hero));
    }
}
