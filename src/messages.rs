//! User-facing dashboard strings (Arabic UI).

pub const CONNECTION_ERROR: &str = "حدث خطأ في الاتصال";
pub const STOCK_ERROR_PREFIX: &str = "خطأ: ";
pub const ORDER_ERROR_PREFIX: &str = "حدث خطأ: ";

pub const CONFIRM_STATUS_CHANGE: &str = "هل أنت متأكد من تغيير حالة الطلب؟";
pub const DELIVERED_IS_FINAL: &str = "❌ لا يمكن تغيير حالة الطلب بعد التوصيل";

pub const DELETING_LABEL: &str = "جاري الحذف...";

pub const NOT_AUTHORIZED: &str = "غير مصرح لك بتنفيذ هذا الإجراء";
pub const SESSION_EXTENDED: &str = "تم تمديد الجلسة بنجاح";

pub const SESSION_WARNING_TITLE: &str = "تحذير انتهاء الجلسة";
pub const SESSION_WARNING_BODY: &str =
    "جلسة العمل على وشك الانتهاء. سيتم تسجيل خروجك تلقائياً خلال دقائق قليلة.";
pub const SESSION_WARNING_QUESTION: &str = "هل تريد تمديد الجلسة؟";
pub const LOGOUT: &str = "تسجيل الخروج";
pub const EXTEND_SESSION: &str = "تمديد الجلسة";

pub const VARIANT_COLOR: &str = "اللون";
pub const VARIANT_COLOR_PLACEHOLDER: &str = "أحمر";
pub const VARIANT_SIZE: &str = "المقاس";
pub const VARIANT_QUANTITY: &str = "الكمية";
pub const VARIANT_REMOVE: &str = "إزالة";

pub const ALL_PRODUCTS_SHOWN: &str = "عرض جميع المنتجات المتاحة";

/// Refusal shown when a delivered/completed order is deleted.
pub fn delete_refused_terminal(order_id: &str, status: &str) -> String {
    format!(
        "❌ لا يمكن حذف الطلب #{order_id}\n\nالطلبات بحالة \"{status}\" لا يمكن حذفها لأنها مكتملة أو مسلمة.\n\nيمكنك فقط حذف الطلبات المعلقة أو المؤكدة أو المشحونة."
    )
}

/// Refusal shown when the order status is not recognised.
pub fn delete_refused_unknown(order_id: &str, status: &str) -> String {
    format!("❌ لا يمكن حذف الطلب #{order_id}\n\nحالة الطلب \"{status}\" غير معروفة أو غير قابلة للحذف.")
}

pub fn confirm_delete(order_id: &str) -> String {
    format!(
        "🗑️ هل أنت متأكد من حذف الطلب #{order_id}؟\n\n⚠️ سيتم:\n• حذف الطلب بشكل دائم\n• استعادة الكميات إلى المخزون\n• لا يمكن التراجع عن هذا الإجراء"
    )
}

pub fn category_count(visible: usize) -> String {
    format!("{visible} منتج")
}

pub fn search_results(products: usize, categories: usize, term: &str) -> String {
    format!("عرض {products} منتج في {categories} فئة - نتائج البحث عن: \"{term}\"")
}
