use crate::models::{MediaKind, MediaRecord};

/// Curated list substituted when every source fails
pub fn fallback_for(kind: MediaKind) -> Vec<MediaRecord> {
    match kind {
        MediaKind::Tv => classic_tv_shows(),
        MediaKind::Movie => classic_movies(),
    }
}

pub fn classic_tv_shows() -> Vec<MediaRecord> {
    vec![
        MediaRecord::new(
            "繁花",
            8.5,
            "2023",
            "剧情",
            "王家卫",
            "胡歌, 马伊琍, 唐嫣",
            "https://movie.douban.com/subject/35231322/",
        ),
        MediaRecord::new(
            "漫长的季节",
            9.4,
            "2023",
            "悬疑, 剧情",
            "辛爽",
            "范伟, 秦昊, 陈明昊",
            "https://movie.douban.com/subject/35230912/",
        ),
        MediaRecord::new(
            "狂飙",
            8.5,
            "2023",
            "剧情, 犯罪",
            "徐纪周",
            "张译, 张颂文, 李一桐",
            "https://movie.douban.com/subject/35465232/",
        ),
        MediaRecord::new(
            "三体",
            8.0,
            "2023",
            "科幻, 剧情",
            "杨磊",
            "张鲁一, 于和伟, 陈瑾",
            "https://movie.douban.com/subject/26797690/",
        ),
        MediaRecord::new(
            "去有风的地方",
            8.7,
            "2023",
            "剧情, 爱情",
            "丁梓光",
            "刘亦菲, 李现, 胡冰卿",
            "https://movie.douban.com/subject/35642423/",
        ),
    ]
}

pub fn classic_movies() -> Vec<MediaRecord> {
    vec![
        MediaRecord::new(
            "奥本海默",
            8.8,
            "2023",
            "剧情, 传记",
            "克里斯托弗·诺兰",
            "基里安·墨菲, 艾米莉·布朗特, 马特·达蒙",
            "https://movie.douban.com/subject/34562342/",
        ),
        MediaRecord::new(
            "流浪地球2",
            8.3,
            "2023",
            "科幻, 冒险",
            "郭帆",
            "吴京, 刘德华, 李雪健",
            "https://movie.douban.com/subject/26266893/",
        ),
        // Upstream list reuses the Oppenheimer subject URL here
        MediaRecord::new(
            "蜘蛛侠：纵横宇宙",
            8.6,
            "2023",
            "动画, 动作",
            "华金·多斯·桑托斯",
            "沙梅克·摩尔, 海莉·斯坦菲尔德",
            "https://movie.douban.com/subject/34562342/",
        ),
        MediaRecord::new(
            "芭比",
            8.3,
            "2023",
            "喜剧, 奇幻",
            "格蕾塔·葛韦格",
            "玛格特·罗比, 瑞恩·高斯林",
            "https://movie.douban.com/subject/35106807/",
        ),
        MediaRecord::new(
            "银河护卫队3",
            8.4,
            "2023",
            "科幻, 冒险",
            "詹姆斯·古恩",
            "克里斯·帕拉特, 佐伊·索尔达娜",
            "https://movie.douban.com/subject/26184657/",
        ),
    ]
}
