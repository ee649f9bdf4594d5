//! Romanian legal holidays (zile libere legale), Codul muncii art. 139.

/// `(year, month, day, name)` for every built-in legal holiday.
pub(crate) const ROMANIAN_LEGAL_HOLIDAYS: &[(i32, u32, u32, &str)] = &[
    // 2025
    (2025, 1, 1, "Anul Nou"),
    (2025, 1, 2, "Anul Nou (zi 2)"),
    (2025, 1, 6, "Boboteaza"),
    (2025, 1, 7, "Sf. Ioan Botezătorul"),
    (2025, 1, 24, "Unirea Principatelor Române"),
    (2025, 4, 18, "Vinerea Mare (Ortodoxă)"),
    (2025, 4, 20, "Paștele (Ortodox)"),
    (2025, 4, 21, "A doua zi de Paște"),
    (2025, 5, 1, "Ziua Muncii"),
    (2025, 6, 1, "Ziua Copilului"),
    (2025, 6, 8, "Rusalii (Ortodoxe)"),
    (2025, 6, 9, "A doua zi de Rusalii"),
    (2025, 8, 15, "Adormirea Maicii Domnului"),
    (2025, 11, 30, "Sf. Andrei"),
    (2025, 12, 1, "Ziua Națională"),
    (2025, 12, 25, "Crăciunul"),
    (2025, 12, 26, "A doua zi de Crăciun"),
    // 2026
    (2026, 1, 1, "Anul Nou"),
    (2026, 1, 2, "Anul Nou (zi 2)"),
    (2026, 1, 6, "Boboteaza"),
    (2026, 1, 7, "Sf. Ioan Botezătorul"),
    (2026, 1, 24, "Unirea Principatelor Române"),
    (2026, 4, 10, "Vinerea Mare (Ortodoxă)"),
    (2026, 4, 12, "Paștele (Ortodox)"),
    (2026, 4, 13, "A doua zi de Paște"),
    (2026, 5, 1, "Ziua Muncii"),
    (2026, 5, 31, "Rusalii (Ortodoxe)"),
    (2026, 6, 1, "Ziua Copilului / A doua zi de Rusalii"),
    (2026, 8, 15, "Adormirea Maicii Domnului"),
    (2026, 11, 30, "Sf. Andrei"),
    (2026, 12, 1, "Ziua Națională"),
    (2026, 12, 25, "Crăciunul"),
    (2026, 12, 26, "A doua zi de Crăciun"),
    // 2027
    (2027, 1, 1, "Anul Nou"),
    (2027, 1, 2, "Anul Nou (zi 2)"),
    (2027, 1, 6, "Boboteaza"),
    (2027, 1, 7, "Sf. Ioan Botezătorul"),
    (2027, 1, 24, "Unirea Principatelor Române"),
    (2027, 4, 30, "Vinerea Mare (Ortodoxă)"),
    (2027, 5, 1, "Ziua Muncii"),
    (2027, 5, 2, "Paștele (Ortodox)"),
    (2027, 5, 3, "A doua zi de Paște"),
    (2027, 6, 1, "Ziua Copilului"),
    (2027, 6, 20, "Rusalii (Ortodoxe)"),
    (2027, 6, 21, "A doua zi de Rusalii"),
    (2027, 8, 15, "Adormirea Maicii Domnului"),
    (2027, 11, 30, "Sf. Andrei"),
    (2027, 12, 1, "Ziua Națională"),
    (2027, 12, 25, "Crăciunul"),
    (2027, 12, 26, "A doua zi de Crăciun"),
];
