use folio_nav::IconRef;

pub(crate) const USER: &[u8] =
    include_bytes!("../../../../assets/svg/user.svg");
pub(crate) const CODE: &[u8] =
    include_bytes!("../../../../assets/svg/code.svg");
pub(crate) const BRIEFCASE: &[u8] =
    include_bytes!("../../../../assets/svg/briefcase.svg");
pub(crate) const FOLDER: &[u8] =
    include_bytes!("../../../../assets/svg/folder.svg");
pub(crate) const GRADUATION_CAP: &[u8] =
    include_bytes!("../../../../assets/svg/graduation-cap.svg");
pub(crate) const MAIL: &[u8] =
    include_bytes!("../../../../assets/svg/mail.svg");
pub(crate) const PHONE: &[u8] =
    include_bytes!("../../../../assets/svg/phone.svg");
pub(crate) const LINKEDIN: &[u8] =
    include_bytes!("../../../../assets/svg/linkedin.svg");
pub(crate) const GITHUB: &[u8] =
    include_bytes!("../../../../assets/svg/github.svg");
pub(crate) const LINK: &[u8] =
    include_bytes!("../../../../assets/svg/link.svg");
pub(crate) const MENU_OPEN: &[u8] =
    include_bytes!("../../../../assets/svg/menu.svg");
pub(crate) const MENU_CLOSE: &[u8] =
    include_bytes!("../../../../assets/svg/close.svg");

/// Embedded SVG for a renderer-independent icon reference.
pub(crate) fn svg_bytes(icon: IconRef) -> &'static [u8] {
    match icon {
        IconRef::User => USER,
        IconRef::Code => CODE,
        IconRef::Briefcase => BRIEFCASE,
        IconRef::Folder => FOLDER,
        IconRef::GraduationCap => GRADUATION_CAP,
        IconRef::Mail => MAIL,
        IconRef::Phone => PHONE,
        IconRef::Linkedin => LINKEDIN,
        IconRef::Github => GITHUB,
        IconRef::Link => LINK,
    }
}
