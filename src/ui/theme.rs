//! Shared Tailwind class strings so pages and components stay visually consistent.

pub const PAGE_BG: &str = "min-h-screen bg-gradient-to-br from-orange-50 to-red-50 font-sans text-gray-900";

pub const HEADER: &str = "border-b border-gray-200 bg-white shadow-sm";

pub const BTN_PRIMARY: &str =
    "rounded-lg bg-red-600 px-4 py-2 text-sm font-semibold text-white transition hover:bg-red-700";

pub const INPUT: &str = "flex-1 rounded-lg border border-gray-300 bg-white px-4 py-2.5 text-sm text-gray-900 focus:border-red-500 focus:outline-none";

pub const CARD: &str =
    "overflow-hidden rounded-xl border border-gray-200 bg-white shadow-sm transition hover:shadow-lg";

pub const LABEL: &str = "mb-2 text-sm font-semibold text-gray-700";

pub const BADGE_SECONDARY: &str = "rounded-full bg-gray-100 px-2 py-0.5 text-xs text-gray-700";

pub const REVIEW_PANEL: &str = "rounded bg-gray-50 p-2 text-xs";
