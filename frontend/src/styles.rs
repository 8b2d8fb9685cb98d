pub const CONTAINER: &str = "min-h-screen bg-gradient-to-b from-purple-900 to-black text-white p-8 w-full";
pub const TITLE: &str = "text-4xl font-bold mb-8 text-center";
pub const CONTROLS_CARD: &str = "bg-purple-800/80 backdrop-blur-sm p-6 rounded-lg shadow-xl mb-8";
pub const BET_BUTTON: &str = "px-4 py-2 rounded font-bold disabled:opacity-50 disabled:cursor-not-allowed";
pub const SPIN_BUTTON: &str = "w-full py-3 rounded-lg text-xl font-bold transition-all duration-300";
pub const SPIN_BUTTON_ACTIVE: &str = "bg-gradient-to-r from-green-400 to-blue-500 hover:from-green-500 hover:to-blue-600 shadow-lg hover:shadow-xl";
pub const SPIN_BUTTON_DISABLED: &str = "bg-gray-500 cursor-not-allowed opacity-75";
pub const RESULT_BANNER: &str = "px-6 py-3 rounded-xl text-2xl font-bold text-green-400 animate-pulse";
pub const PAYOUT_ROW: &str = "bg-purple-900/60 p-3 rounded-lg shadow-sm flex items-center";
